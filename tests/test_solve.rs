use std::time::Duration;

use evotimetable::{
    config::SchedulerConfig, fitness, rng::RandomNumberGenerator, scheduler::GeneticScheduler,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_solve_full_problem() {
    init_tracing();
    let config = SchedulerConfig::builder()
        .subjects([
            "IS",
            "Quants",
            "Refactoring",
            "SPP",
            "Image recognition",
            "Management",
        ])
        .teachers([
            "Kulyabko",
            "Derevyanchenko",
            "Glibovec",
            "Vergunova",
            "Bobil",
            "Ryabokon",
        ])
        .groups(["TK-41", "TK-42", "TTP-41", "TTP-42", "MI-41", "MI-42"])
        .classes_per_day(5)
        .population_size(100)
        .mutation_rate(0.1)
        .generations(100)
        .build()
        .unwrap();

    let scheduler = GeneticScheduler::new(config);
    let mut rng = RandomNumberGenerator::from_seed(42);
    let result = scheduler.solve(&mut rng).unwrap();

    assert_eq!(result.schedule.len(), 6);
    assert!(result.fitness > 0.0 && result.fitness <= 1.0);
    // The reported fitness is recomputed from the returned schedule.
    assert_eq!(result.fitness, fitness::score(&result.schedule));
    for assignment in result.schedule.iter() {
        assert!((1..=5).contains(&assignment.time_slot));
        assert!(assignment.teacher.0 < 6);
        assert!(assignment.group.0 < 6);
    }
}

#[test]
fn test_solve_forced_conflict_scenario() {
    // Two subjects, one teacher, one group, one slot: every possible schedule
    // has exactly one colliding pair that shares both teacher and group, so
    // conflicts = 2 and fitness = 1/3 for every candidate.
    let config = SchedulerConfig::builder()
        .subjects(["A", "B"])
        .teachers(["T1"])
        .groups(["G1"])
        .classes_per_day(1)
        .population_size(4)
        .mutation_rate(0.1)
        .generations(1)
        .build()
        .unwrap();

    let scheduler = GeneticScheduler::new(config);
    let mut rng = RandomNumberGenerator::from_seed(1);
    let result = scheduler.solve(&mut rng).unwrap();

    assert_eq!(result.schedule.len(), 2);
    assert!((result.fitness - 1.0 / 3.0).abs() < f64::EPSILON);
    for assignment in result.schedule.iter() {
        assert_eq!(assignment.time_slot, 1);
        assert_eq!(assignment.teacher.0, 0);
        assert_eq!(assignment.group.0, 0);
    }
}

#[test]
fn test_solve_single_subject_bypasses_crossover() {
    // A single-subject schedule has no pairs, so every candidate in every
    // generation is conflict-free; crossover has no valid cut point and the
    // driver must bypass it rather than fail.
    let config = SchedulerConfig::builder()
        .subjects(["A"])
        .teachers(["T1", "T2"])
        .groups(["G1", "G2"])
        .classes_per_day(3)
        .population_size(6)
        .mutation_rate(0.5)
        .generations(10)
        .build()
        .unwrap();

    let scheduler = GeneticScheduler::new(config);
    let mut rng = RandomNumberGenerator::from_seed(2);
    let result = scheduler.solve(&mut rng).unwrap();

    assert_eq!(result.schedule.len(), 1);
    assert_eq!(result.fitness, 1.0);
}

#[test]
fn test_solve_odd_population_size() {
    let config = SchedulerConfig::builder()
        .subjects(["A", "B", "C"])
        .teachers(["T1", "T2"])
        .groups(["G1", "G2"])
        .classes_per_day(3)
        .population_size(5)
        .mutation_rate(0.2)
        .generations(8)
        .build()
        .unwrap();

    let scheduler = GeneticScheduler::new(config);
    let mut rng = RandomNumberGenerator::from_seed(3);
    let result = scheduler.solve(&mut rng).unwrap();
    assert_eq!(result.schedule.len(), 3);
    assert!(result.fitness > 0.0 && result.fitness <= 1.0);
}

#[test]
fn test_solve_with_zero_mutation_rate() {
    let config = SchedulerConfig::builder()
        .subjects(["A", "B", "C"])
        .teachers(["T1", "T2", "T3"])
        .groups(["G1", "G2", "G3"])
        .classes_per_day(3)
        .population_size(10)
        .mutation_rate(0.0)
        .generations(5)
        .build()
        .unwrap();

    let scheduler = GeneticScheduler::new(config);
    let mut rng = RandomNumberGenerator::from_seed(4);
    let result = scheduler.solve(&mut rng).unwrap();
    assert_eq!(result.schedule.len(), 3);
    assert!(result.fitness > 0.0 && result.fitness <= 1.0);
}

#[test]
fn test_solve_exhausted_time_budget_still_returns_champion() {
    // A zero budget truncates the loop after the first generation's
    // evaluation, which must still record and return a champion.
    let config = SchedulerConfig::builder()
        .subjects(["A", "B", "C", "D"])
        .teachers(["T1", "T2"])
        .groups(["G1", "G2"])
        .classes_per_day(4)
        .population_size(10)
        .mutation_rate(0.1)
        .generations(1_000_000)
        .time_budget(Duration::ZERO)
        .build()
        .unwrap();

    let scheduler = GeneticScheduler::new(config);
    let mut rng = RandomNumberGenerator::from_seed(5);
    let result = scheduler.solve(&mut rng).unwrap();
    assert_eq!(result.schedule.len(), 4);
    assert!(result.fitness > 0.0 && result.fitness <= 1.0);
}

#[test]
fn test_solve_same_seed_same_result() {
    let build = || {
        SchedulerConfig::builder()
            .subjects(["A", "B", "C", "D", "E"])
            .teachers(["T1", "T2", "T3"])
            .groups(["G1", "G2", "G3"])
            .classes_per_day(4)
            .population_size(30)
            .mutation_rate(0.1)
            .generations(15)
            .build()
            .unwrap()
    };

    let first = GeneticScheduler::new(build())
        .solve(&mut RandomNumberGenerator::from_seed(99))
        .unwrap();
    let second = GeneticScheduler::new(build())
        .solve(&mut RandomNumberGenerator::from_seed(99))
        .unwrap();

    assert_eq!(first.schedule, second.schedule);
    assert_eq!(first.fitness, second.fitness);
}

#[test]
fn test_solve_single_slot_day_converges_without_error() {
    // classes_per_day == 1 forces every pair into the same slot: maximum
    // conflict pressure, but a valid configuration that must run normally.
    let config = SchedulerConfig::builder()
        .subjects(["A", "B", "C", "D"])
        .teachers(["T1", "T2", "T3", "T4"])
        .groups(["G1", "G2", "G3", "G4"])
        .classes_per_day(1)
        .population_size(20)
        .mutation_rate(0.1)
        .generations(20)
        .build()
        .unwrap();

    let scheduler = GeneticScheduler::new(config);
    let mut rng = RandomNumberGenerator::from_seed(6);
    let result = scheduler.solve(&mut rng).unwrap();
    assert_eq!(result.schedule.len(), 4);
    assert!(result.fitness > 0.0 && result.fitness <= 1.0);
}
