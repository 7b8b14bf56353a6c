/// Asserts that every agent of the engine sits inside the lattice.
#[macro_export]
macro_rules! assert_on_lattice {
    ($engine:expr) => {
        let w = $engine.config().world.width;
        let h = $engine.config().world.height;
        for (i, agent) in $engine.population().agents().iter().enumerate() {
            assert!(
                agent.x < w && agent.y < h,
                "Agent {} at ({}, {}) is off the {}x{} lattice",
                i,
                agent.x,
                agent.y,
                w,
                h
            );
            assert!(agent.heading.index() < 8, "Agent {} heading out of range", i);
        }
    };
}

/// Asserts that the population count matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($engine:expr, $count:expr) => {
        assert_eq!(
            $engine.population().len(),
            $count,
            "Population count mismatch"
        );
    };
}

/// Asserts two floats agree to within an absolute tolerance.
#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r): (f64, f64) = ($left, $right);
        assert!(
            (l - r).abs() <= $tol,
            "{} and {} differ by more than {}",
            l,
            r,
            $tol
        );
    };
}
