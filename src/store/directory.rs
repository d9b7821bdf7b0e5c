use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Activity;

/// The in-memory activity directory: activity name -> record. This is the
/// only stateful resource of the service. It is seeded once at startup and
/// lives for the process lifetime; nothing is persisted across restarts.
#[derive(Debug, Clone, Default)]
pub struct ActivityDirectory {
    activities: BTreeMap<String, Activity>,
}

/// Handle shared across request handlers. Enroll/withdraw hold the write
/// guard across their full check-then-mutate sequence, so two concurrent
/// signups cannot both pass the membership check.
pub type SharedDirectory = Arc<RwLock<ActivityDirectory>>;

pub fn shared(directory: ActivityDirectory) -> SharedDirectory {
    Arc::new(RwLock::new(directory))
}

impl ActivityDirectory {
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.get_mut(name)
    }

    pub fn all(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    fn insert(&mut self, name: &str, activity: Activity) {
        self.activities.insert(name.to_string(), activity);
    }

    /// The fixed initial dataset of Mergington High School.
    pub fn seed() -> Self {
        let mut dir = Self::default();
        dir.insert(
            "Chess Club",
            Activity {
                description: "Learn strategies and compete in chess tournaments".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 12,
                participants: emails(&["michael", "daniel"]),
            },
        );
        dir.insert(
            "Programming Class",
            Activity {
                description: "Learn programming fundamentals and build software projects"
                    .to_string(),
                schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
                max_participants: 20,
                participants: emails(&["emma", "sophia"]),
            },
        );
        dir.insert(
            "Gym Class",
            Activity {
                description: "Physical education and sports activities".to_string(),
                schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM".to_string(),
                max_participants: 30,
                participants: emails(&["john", "olivia"]),
            },
        );
        dir.insert(
            "Soccer Team",
            Activity {
                description: "Competitive soccer team practicing for interschool matches"
                    .to_string(),
                schedule: "Mondays and Thursdays, 4:00 PM - 6:00 PM".to_string(),
                max_participants: 22,
                participants: emails(&["alex", "nina"]),
            },
        );
        dir.insert(
            "Basketball Club",
            Activity {
                description: "Pickup games and skill development for basketball players"
                    .to_string(),
                schedule: "Wednesdays, 5:00 PM - 7:00 PM".to_string(),
                max_participants: 18,
                participants: emails(&["maria", "kevin"]),
            },
        );
        dir.insert(
            "Art Club",
            Activity {
                description: "Explore drawing, painting, and mixed media projects".to_string(),
                schedule: "Tuesdays, 4:00 PM - 6:00 PM".to_string(),
                max_participants: 15,
                participants: emails(&["leah", "sam"]),
            },
        );
        dir.insert(
            "Drama Society",
            Activity {
                description: "Acting, stagecraft, and producing school plays".to_string(),
                schedule: "Thursdays, 4:30 PM - 6:30 PM".to_string(),
                max_participants: 25,
                participants: emails(&["harper", "liam"]),
            },
        );
        dir.insert(
            "Math Club",
            Activity {
                description: "Problem solving, competitions, and math enrichment".to_string(),
                schedule: "Wednesdays, 3:30 PM - 4:30 PM".to_string(),
                max_participants: 20,
                participants: emails(&["isabella", "noah"]),
            },
        );
        dir.insert(
            "Robotics Club",
            Activity {
                description: "Design, build, and program robots for challenges and competitions"
                    .to_string(),
                schedule: "Fridays, 4:00 PM - 6:00 PM".to_string(),
                max_participants: 16,
                participants: emails(&["ava", "ethan"]),
            },
        );
        dir
    }
}

fn emails(locals: &[&str]) -> Vec<String> {
    locals
        .iter()
        .map(|l| format!("{}@mergington.edu", l))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_contains_all_activities() {
        let dir = ActivityDirectory::seed();
        assert_eq!(dir.all().len(), 9);
        for name in [
            "Chess Club",
            "Programming Class",
            "Gym Class",
            "Soccer Team",
            "Basketball Club",
            "Art Club",
            "Drama Society",
            "Math Club",
            "Robotics Club",
        ] {
            assert!(dir.get(name).is_some(), "missing {}", name);
        }
    }

    #[test]
    fn seeded_chess_club_roster() {
        let dir = ActivityDirectory::seed();
        let chess = dir.get("Chess Club").unwrap();
        assert_eq!(chess.max_participants, 12);
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }
}
