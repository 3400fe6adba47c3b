//! Interactive menu session.
//!
//! Each submenu lives in its own file, mirroring the store layout. All of
//! them run over one [`Session`], which owns the store and the prompter.

mod packages;
mod patients;
mod records;
mod reports;

use std::io::{self, BufRead, Write};

use mcu_core::config::APP_NAME;
use mcu_core::{ClinicStore, StoreError};

use crate::prompt::Prompter;
use crate::render;

pub struct Session<R, W> {
    store: ClinicStore,
    prompt: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: ClinicStore, input: R, output: W) -> Self {
        Self {
            store,
            prompt: Prompter::new(input, output),
        }
    }

    pub fn store(&self) -> &ClinicStore {
        &self.store
    }

    pub fn into_parts(self) -> (ClinicStore, W) {
        (self.store, self.prompt.into_output())
    }

    /// Run the main menu until the operator exits or input ends, then save.
    pub fn run(&mut self) -> io::Result<()> {
        match self.main_menu() {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                tracing::info!("input closed, exiting");
                self.prompt.say("")?;
            }
            Err(e) => {
                if let Err(save_err) = self.store.save() {
                    tracing::error!(error = %save_err, "final save failed");
                }
                return Err(e);
            }
        }

        self.save()?;
        self.prompt.say("Thank you for using the system. Goodbye!")
    }

    fn main_menu(&mut self) -> io::Result<()> {
        loop {
            self.prompt.say(render::header(APP_NAME))?;
            self.prompt.say(
                "1. Patient Management\n\
                 2. Package Management\n\
                 3. Check-up Records\n\
                 4. Reports\n\
                 5. Save Data\n\
                 0. Save and Exit",
            )?;

            match self.prompt.choice(5)? {
                1 => self.patient_menu()?,
                2 => self.package_menu()?,
                3 => self.record_menu()?,
                4 => self.report_menu()?,
                5 => self.save()?,
                _ => return Ok(()),
            }
        }
    }

    /// Save and tell the operator how it went. A failed save is reported,
    /// not fatal.
    fn save(&mut self) -> io::Result<()> {
        match self.store.save() {
            Ok(()) => self.prompt.success(format_args!(
                "Data saved to {}",
                self.store.config().data_file.display()
            )),
            Err(e) => {
                tracing::error!(error = %e, "save failed");
                self.prompt.error(format_args!("Failed to save data: {}", e))
            }
        }
    }

    fn report_error(&mut self, err: StoreError) -> io::Result<()> {
        tracing::debug!(error = %err, "operation rejected");
        self.prompt.error(err)
    }

    /// Read an entity ID. Any positive number is accepted; lookup decides.
    fn read_id(&mut self, prompt: &str) -> io::Result<u32> {
        self.prompt.number(prompt, 1, u32::MAX)
    }
}
