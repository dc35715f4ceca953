use chrono::{Local, NaiveDateTime};
use daily_commit::simulator::{Clock, RandomSource};
use git2::Repository;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;
use std::rc::Rc;
use std::sync::Once;
use std::time::Duration;

#[allow(dead_code)]
static INIT: Once = Once::new();

pub const GIT_IDENTITY: &[(&str, &str)] = &[
    ("GIT_AUTHOR_NAME", "Test User"),
    ("GIT_AUTHOR_EMAIL", "test@example.com"),
    ("GIT_COMMITTER_NAME", "Test User"),
    ("GIT_COMMITTER_EMAIL", "test@example.com"),
];

/// Quiet logger plus a git identity for every `git commit` spawned by the test.
#[allow(dead_code)]
pub fn setup_test_env() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
            .is_test(true)
            .init();
        for (key, value) in GIT_IDENTITY {
            std::env::set_var(key, value);
        }
    });
}

/// Number of commits reachable from HEAD, zero for an unborn branch.
#[allow(dead_code)]
pub fn commit_count(path: &Path) -> usize {
    let repo = Repository::open(path).expect("Failed to open repository");
    let head = match repo.head() {
        Ok(head) => head,
        Err(_) => return 0,
    };
    let mut revwalk = repo.revwalk().unwrap();
    revwalk.push(head.peel_to_commit().unwrap().id()).unwrap();
    revwalk.count()
}

/// Commit subjects from HEAD backwards.
#[allow(dead_code)]
pub fn commit_messages(path: &Path) -> Vec<String> {
    let repo = Repository::open(path).expect("Failed to open repository");
    let mut revwalk = repo.revwalk().unwrap();
    revwalk.push_head().unwrap();
    revwalk
        .map(|oid| {
            let commit = repo.find_commit(oid.unwrap()).unwrap();
            commit.summary().unwrap_or("").to_string()
        })
        .collect()
}

/// Replays fixed draws and panics when the script runs out.
#[allow(dead_code)]
pub struct ScriptedRandom {
    units: VecDeque<f64>,
    ints: VecDeque<u64>,
}

#[allow(dead_code)]
impl ScriptedRandom {
    pub fn new(units: &[f64], ints: &[u64]) -> Self {
        Self {
            units: units.iter().copied().collect(),
            ints: ints.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f64 {
        self.units.pop_front().expect("unit draw not scripted")
    }

    fn between(&mut self, low: u64, high: u64) -> u64 {
        let value = self.ints.pop_front().expect("integer draw not scripted");
        assert!(
            (low..=high).contains(&value),
            "scripted value {value} outside [{low}, {high}]"
        );
        value
    }
}

/// Records requested sleeps without waiting.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct InstantClock {
    pub sleeps: Rc<RefCell<Vec<Duration>>>,
}

impl Clock for InstantClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
    }
}
