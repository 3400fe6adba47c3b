//! Report screens.

use std::io::{self, BufRead, Write};

use mcu_core::models::{MAX_YEAR, MIN_YEAR};
use mcu_core::reports;
use mcu_core::YearMonth;

use super::Session;
use crate::render;

impl<R: BufRead, W: Write> Session<R, W> {
    pub(super) fn report_menu(&mut self) -> io::Result<()> {
        loop {
            self.prompt.say(render::header("REPORTS"))?;
            let summary = render::overview(&reports::overview(&self.store));
            self.prompt.say(summary)?;
            self.prompt.say(
                "\n1. Patient Statistics\n\
                 2. Package Statistics\n\
                 3. Revenue Report\n\
                 4. Monthly Income\n\
                 0. Back to Main Menu",
            )?;

            let text = match self.prompt.choice(4)? {
                1 => render::patient_stats(reports::patient_stats(&self.store).as_ref()),
                2 => render::package_stats(reports::package_stats(&self.store).as_ref()),
                3 => render::revenue(&reports::revenue_report(&self.store)),
                4 => {
                    let month = self.read_month()?;
                    render::monthly_income(&reports::monthly_income(&self.store, month))
                }
                _ => return Ok(()),
            };
            self.prompt.say(text)?;
        }
    }

    fn read_month(&mut self) -> io::Result<YearMonth> {
        let month = self.prompt.number("Enter month (1-12): ", 1, 12)?;
        let year = self.prompt.number(
            &format!("Enter year ({}-{}): ", MIN_YEAR, MAX_YEAR),
            MIN_YEAR,
            MAX_YEAR,
        )?;
        Ok(YearMonth { year, month })
    }
}
