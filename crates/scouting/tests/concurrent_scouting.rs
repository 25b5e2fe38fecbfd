use std::sync::Arc;
use std::thread;

use scoutrank_common::ScoutConfig;
use scoutrank_scouting::{PlayerProfile, Roster, ScoutingService};

fn roster() -> Roster {
    let players = (0..40)
        .map(|i| {
            let x = i as f64;
            PlayerProfile::new(
                format!("Player {i:02}"),
                Some(format!("Team {}", i % 4)),
                vec![x / 40.0, (x * 0.3).sin().abs(), ((i % 7) as f64) / 7.0],
            )
        })
        .collect();
    Roster::new(players)
}

#[test]
fn shared_service_gives_identical_reports_across_threads() {
    let service = Arc::new(ScoutingService::new(&ScoutConfig::default()).unwrap());
    let roster = Arc::new(roster());
    let expected = service.find_similar(&roster, "Player 13", Some(5)).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            let roster = Arc::clone(&roster);
            thread::spawn(move || service.find_similar(&roster, "Player 13", Some(5)).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert_eq!(expected.matches.len(), 5);
    assert!(expected.matches.iter().all(|m| m.name != "Player 13"));
}

#[test]
fn report_serializes_for_the_host() {
    let service = ScoutingService::new(&ScoutConfig::default()).unwrap();
    let report = service.find_similar(&roster(), "player 02", Some(3)).unwrap();

    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["target"], "Player 02");
    assert_eq!(value["metric"], "weighted_euclidean");
    assert_eq!(value["matches"].as_array().unwrap().len(), 3);
}
