//! End-to-end pipeline tests with a scripted pactl runner
//!
//! No subprocess is spawned; the runner replays canned command results and
//! records every invocation so the no-partial-application property can be
//! asserted directly.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::os::unix::process::ExitStatusExt;
use std::process::{ExitStatus, Output};
use std::rc::Rc;

use sinkcycle_cli::cycler::{CycleOutcome, SinkCycler};
use sinkcycle_cli::error::CycleError;
use sinkcycle_pactl::{CommandRunner, PactlClient, PactlError};

const LISTING: &str = r#"[
    {"index": 1, "name": "sink1", "description": "Speakers", "properties": {}},
    {"index": 2, "name": "sink2", "description": "Headphones", "properties": {"device.serial": "HP-123"}},
    {"index": 3, "name": "sink3", "description": "HDMI Output", "properties": {}}
]"#;

#[derive(Clone, Default)]
struct ScriptedRunner {
    responses: Rc<RefCell<VecDeque<Output>>>,
    calls: Rc<RefCell<Vec<Vec<String>>>>,
}

impl ScriptedRunner {
    fn push(&self, code: i32, stdout: &str, stderr: &str) {
        self.responses.borrow_mut().push_back(Output {
            status: ExitStatus::from_raw(code << 8),
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        });
    }

    fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    fn issued_a_switch(&self) -> bool {
        self.calls()
            .iter()
            .any(|call| call.iter().any(|arg| arg == "set-default-sink"))
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<Output> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|a| a.to_string()));
        self.calls.borrow_mut().push(call);
        Ok(self
            .responses
            .borrow_mut()
            .pop_front()
            .expect("unscripted pactl call"))
    }
}

fn cycler(runner: &ScriptedRunner) -> SinkCycler<ScriptedRunner> {
    SinkCycler::with_client(PactlClient::with_runner(runner.clone()))
}

#[test]
fn cycles_to_the_following_sink() {
    let runner = ScriptedRunner::default();
    runner.push(0, "sink2\n", "");
    runner.push(0, LISTING, "");
    runner.push(0, "", "");

    let outcome = cycler(&runner).cycle().expect("cycle should succeed");

    match outcome {
        CycleOutcome::Switched(sink) => {
            assert_eq!(sink.name, "sink3");
            assert_eq!(sink.description, "HDMI Output");
        }
        other => panic!("expected a switch, got {other:?}"),
    }

    let calls = runner.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[2], ["pactl", "set-default-sink", "sink3"]);
}

#[test]
fn wraps_from_the_last_sink_to_the_first() {
    let runner = ScriptedRunner::default();
    runner.push(0, "sink3\n", "");
    runner.push(0, LISTING, "");
    runner.push(0, "", "");

    let outcome = cycler(&runner).cycle().expect("cycle should succeed");

    match outcome {
        CycleOutcome::Switched(sink) => assert_eq!(sink.name, "sink1"),
        other => panic!("expected a switch, got {other:?}"),
    }
    assert_eq!(runner.calls()[2], ["pactl", "set-default-sink", "sink1"]);
}

#[test]
fn failed_listing_aborts_before_any_switch() {
    let runner = ScriptedRunner::default();
    runner.push(0, "sink2\n", "");
    runner.push(1, "", "Connection failure: Connection refused");

    let err = cycler(&runner).cycle().expect_err("cycle must abort");

    assert!(matches!(err, CycleError::Pactl(PactlError::Query { .. })));
    assert_eq!(err.exit_code(), 1);
    assert!(!runner.issued_a_switch());
}

#[test]
fn underlying_exit_codes_propagate() {
    let runner = ScriptedRunner::default();
    runner.push(2, "", "Daemon not responding");

    let err = cycler(&runner).cycle().expect_err("cycle must abort");
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn unknown_current_sink_aborts_before_any_switch() {
    let runner = ScriptedRunner::default();
    runner.push(0, "sink9\n", "");
    runner.push(0, LISTING, "");

    let err = cycler(&runner).cycle().expect_err("cycle must abort");

    assert!(matches!(
        err,
        CycleError::NotFound { ref current, sink_count: 3 } if current == "sink9"
    ));
    assert_eq!(err.exit_code(), 1);
    assert!(!runner.issued_a_switch());
}

#[test]
fn no_default_sink_stops_the_pipeline_without_error() {
    let runner = ScriptedRunner::default();
    runner.push(0, "", "");

    let outcome = cycler(&runner).cycle().expect("no-op should not fail");

    assert_eq!(outcome, CycleOutcome::NoDefaultSink);
    assert_eq!(runner.calls().len(), 1);
    assert!(!runner.issued_a_switch());
}

#[test]
fn failed_switch_surfaces_the_switch_error() {
    let runner = ScriptedRunner::default();
    runner.push(0, "sink1\n", "");
    runner.push(0, LISTING, "");
    runner.push(1, "", "Failure: No such entity");

    let err = cycler(&runner).cycle().expect_err("cycle must abort");
    assert!(matches!(err, CycleError::Pactl(PactlError::Switch { .. })));
    assert_eq!(err.exit_code(), 1);
}
