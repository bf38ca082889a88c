/// Sequential source of uniform draws in [0, 1).
///
/// Each call consumes exactly one draw. Any `rand` generator is a source;
/// seed it for reproducible runs.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: rand::RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        rand::Rng::random::<f64>(self)
    }
}
