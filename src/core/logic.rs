use crate::config::Config;
use crate::core::assigner::{Assigner, Strategy};
use crate::core::roster;
use crate::errors::AppResult;
use crate::models::schedule::WeekSchedule;
use crate::ui::messages::info;
use rand::Rng;

pub struct Core;

impl Core {
    /// Build the weekly schedule from the configured roster.
    ///
    /// Without an explicit seed a fresh one is drawn from entropy and
    /// printed, so any run can be reproduced afterwards.
    pub fn plan_week(
        cfg: &Config,
        seed: Option<u64>,
        strategy: Option<Strategy>,
    ) -> AppResult<WeekSchedule> {
        let (employees, days) = roster::build_week(cfg)?;

        let seed = seed.unwrap_or_else(|| rand::rng().random());
        let strategy = strategy.unwrap_or(cfg.strategy);

        info(format!("Using seed {}", seed));

        Ok(Assigner::new(strategy, seed).assign(&employees, &days))
    }
}
