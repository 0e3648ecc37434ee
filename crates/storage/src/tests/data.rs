use chrono::{TimeZone, Utc};
use liftos_domain as domain;

pub static TRAINING_SETS: std::sync::LazyLock<Vec<domain::TrainingSet>> =
    std::sync::LazyLock::new(|| vec![TRAINING_SET.clone(), TRAINING_SET_2.clone()]);

pub static TRAINING_SET: std::sync::LazyLock<domain::TrainingSet> =
    std::sync::LazyLock::new(|| domain::TrainingSet {
        id: 1.into(),
        timestamp: Utc.with_ymd_and_hms(2024, 3, 4, 17, 30, 0).unwrap(),
        day_name: "Lower".to_string(),
        exercise: domain::Name::new("Back Squat").unwrap(),
        weight: domain::Weight::new(100.0).unwrap(),
        reps: domain::Reps::new(5).unwrap(),
        rpe: Some(domain::RPE::EIGHT),
        unit: domain::Unit::Kg,
        exercise_type: domain::ExerciseType::Main,
    });

pub static TRAINING_SET_2: std::sync::LazyLock<domain::TrainingSet> =
    std::sync::LazyLock::new(|| domain::TrainingSet {
        id: 2.into(),
        timestamp: Utc.with_ymd_and_hms(2024, 3, 6, 8, 15, 30).unwrap(),
        day_name: "Upper".to_string(),
        exercise: domain::Name::new("Lateral Raise").unwrap(),
        weight: domain::Weight::new(12.5).unwrap(),
        reps: domain::Reps::new(15).unwrap(),
        rpe: None,
        unit: domain::Unit::Kg,
        exercise_type: domain::ExerciseType::Accessory,
    });

pub static SETTINGS: std::sync::LazyLock<domain::Settings> =
    std::sync::LazyLock::new(|| domain::Settings {
        unit: domain::Unit::Lb,
        rest: domain::RestTimes {
            main: 150,
            accessory: 60,
        },
        bar_weight: 45.0,
        plates: vec![45.0, 35.0, 25.0, 10.0, 5.0, 2.5],
    });

pub static BESTS: std::sync::LazyLock<domain::Bests> = std::sync::LazyLock::new(|| {
    [
        (
            domain::Name::new("Back Squat").unwrap(),
            domain::BestRecord {
                e1rm: 120.0,
                reps_pr: 8,
            },
        ),
        (
            domain::Name::new("Bench Press").unwrap(),
            domain::BestRecord {
                e1rm: 90.5,
                reps_pr: 5,
            },
        ),
    ]
    .into_iter()
    .collect()
});

pub static PROGRAM: std::sync::LazyLock<domain::Program> =
    std::sync::LazyLock::new(|| domain::Program {
        days: vec![
            domain::ProgramDay {
                name: domain::Name::new("Push").unwrap(),
                exercises: vec![
                    domain::ProgramExercise {
                        name: domain::Name::new("Overhead Press").unwrap(),
                        exercise_type: domain::ExerciseType::Main,
                    },
                    domain::ProgramExercise {
                        name: domain::Name::new("Triceps Pushdown").unwrap(),
                        exercise_type: domain::ExerciseType::Accessory,
                    },
                ],
            },
            domain::ProgramDay {
                name: domain::Name::new("Rest").unwrap(),
                exercises: vec![],
            },
        ],
    });
