use mergington::data::{Activity, ActivityDirectory};

/// The activities Mergington High School offers when the server starts.
pub fn default_directory() -> ActivityDirectory {
    [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Soccer Team",
            Activity::new(
                "Join the school soccer team and compete in inter-school matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(["alex@mergington.edu", "liam@mergington.edu"]),
        ),
        (
            "Basketball Club",
            Activity::new(
                "Practice basketball skills and play friendly games",
                "Wednesdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["noah@mergington.edu", "ava@mergington.edu"]),
        ),
        (
            "Art Studio",
            Activity::new(
                "Explore painting, drawing, and sculpture techniques",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["isabella@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct, and produce plays and school performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(["lucas@mergington.edu", "amelia@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                16,
            )
            .with_participants(["ethan@mergington.edu", "harper@mergington.edu"]),
        ),
        (
            "Science Olympiad",
            Activity::new(
                "Prepare for science competitions through hands-on experiments",
                "Saturdays, 10:00 AM - 12:00 PM",
                18,
            )
            .with_participants(["mason@mergington.edu", "evelyn@mergington.edu"]),
        ),
    ]
    .into_iter()
    .collect()
}
