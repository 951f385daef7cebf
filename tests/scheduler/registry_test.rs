/*!
 * Registry Tests
 * Dispatch by key, error reporting, and the JSON shape handed to consumers
 */

use cpu_sched_sim::{lookup, run, Policy, Process, SimError, SimOptions, REGISTRY};
use pretty_assertions::assert_eq;

fn workload() -> Vec<Process> {
    vec![
        Process::new(1, 0, 5),
        Process::new(2, 1, 3),
        Process::new(3, 2, 4),
    ]
}

#[test]
fn test_fcfs_reference_values() {
    let outcome = run("fcfs", &workload(), &SimOptions::new()).unwrap();
    let results = &outcome.simulation.results;

    assert_eq!(results.iter().map(|r| r.completion).collect::<Vec<_>>(), vec![5, 8, 12]);
    assert_eq!(results.iter().map(|r| r.turnaround).collect::<Vec<_>>(), vec![5, 7, 10]);
    assert_eq!(results.iter().map(|r| r.waiting).collect::<Vec<_>>(), vec![0, 4, 6]);
    assert_eq!(results.iter().map(|r| r.response).collect::<Vec<_>>(), vec![0, 4, 6]);
}

#[test]
fn test_every_key_resolves() {
    for info in REGISTRY.iter() {
        let found = lookup(info.policy.as_str()).unwrap();
        assert_eq!(found.abbreviation, info.abbreviation);
    }
    assert_eq!(lookup("round_robin").unwrap().policy, Policy::RoundRobin);
}

#[test]
fn test_round_robin_quantum_rejection() {
    let input = workload();

    let missing = run("rr", &input, &SimOptions::new()).unwrap_err();
    assert_eq!(missing, SimError::MissingQuantum { policy: "rr".into() });

    for bad in [0, -1, -100] {
        let err = run("rr", &input, &SimOptions::new().with_quantum(bad)).unwrap_err();
        assert_eq!(
            err,
            SimError::InvalidQuantum {
                policy: "rr".into(),
                value: bad
            }
        );
    }
}

#[test]
fn test_unknown_policy_message_lists_alternatives() {
    let err = run("lottery", &workload(), &SimOptions::new()).unwrap_err();
    assert_eq!(err.to_string(), "Unknown scheduling policy 'lottery'");

    let help = miette::Diagnostic::help(&err).unwrap().to_string();
    assert!(help.contains("fcfs"));
    assert!(help.contains("mlfq"));
}

#[test]
fn test_empty_input_rejected() {
    for info in REGISTRY.iter() {
        let err = info.run(&[], &SimOptions::new().with_quantum(2)).unwrap_err();
        assert_eq!(err, SimError::EmptyInput);
    }
}

#[test]
fn test_input_is_not_mutated() {
    let input = workload();
    let snapshot = input.clone();
    for info in REGISTRY.iter() {
        info.run(&input, &SimOptions::new().with_quantum(2)).unwrap();
    }
    assert_eq!(input, snapshot);
}

#[test]
fn test_json_shape_for_visualization() {
    let outcome = run("srt", &workload(), &SimOptions::new()).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["policy"], "srt");
    assert_eq!(json["policyDisplayName"], "Shortest Remaining Time");
    assert_eq!(json["policyAbbreviation"], "SRT");
    assert_eq!(json["timeline"][0]["occupant"]["kind"], "process");
    assert_eq!(json["timeline"][0]["start"], 0);
    assert!(json["averages"]["avgWaiting"].is_number());
    assert_eq!(json["results"].as_array().unwrap().len(), 3);
    assert!(json["stats"]["cpuUtilization"].is_number());
    assert!(json["stats"]["contextSwitches"].is_number());
}

#[test]
fn test_json_keys_are_camel_case() {
    fn snake_keys(value: &serde_json::Value, found: &mut Vec<String>) {
        match value {
            serde_json::Value::Object(map) => {
                for (key, inner) in map {
                    if key.contains('_') {
                        found.push(key.clone());
                    }
                    snake_keys(inner, found);
                }
            }
            serde_json::Value::Array(items) => items.iter().for_each(|v| snake_keys(v, found)),
            _ => {}
        }
    }

    let mut found = Vec::new();
    let outcome = run("mlfq", &workload(), &SimOptions::new()).unwrap();
    snake_keys(&serde_json::to_value(&outcome).unwrap(), &mut found);
    snake_keys(&serde_json::to_value(&REGISTRY).unwrap(), &mut found);
    snake_keys(&serde_json::to_value(SimOptions::new().with_aging_rate(2)).unwrap(), &mut found);
    snake_keys(&serde_json::to_value(SimError::EmptyInput).unwrap(), &mut found);
    assert_eq!(found, Vec::<String>::new());
}

#[test]
fn test_processes_parse_from_json() {
    let input: Vec<Process> = serde_json::from_str(
        r#"[{"pid": 1, "arrival": 0, "burst": 3}, {"pid": 2, "arrival": 1, "burst": 2, "priority": -1}]"#,
    )
    .unwrap();

    assert_eq!(input, vec![Process::new(1, 0, 3), Process::new(2, 1, 2).with_priority(-1)]);
}

#[test]
fn test_idempotent_runs() {
    for info in REGISTRY.iter() {
        let options = SimOptions::new().with_quantum(3);
        let first = info.run(&workload(), &options).unwrap();
        let second = info.run(&workload(), &options).unwrap();
        assert_eq!(first, second, "{} is not deterministic", info.policy);
    }
}
