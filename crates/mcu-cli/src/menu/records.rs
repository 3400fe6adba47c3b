//! Check-up record screens.

use std::io::{self, BufRead, Write};

use mcu_core::{RecordChanges, RecordSort};

use super::Session;
use crate::render;

impl<R: BufRead, W: Write> Session<R, W> {
    pub(super) fn record_menu(&mut self) -> io::Result<()> {
        loop {
            self.prompt.say(render::header("CHECK-UP RECORDS"))?;
            self.prompt.say(
                "1. Add Check-up Record\n\
                 2. View All Records\n\
                 3. Search Records\n\
                 4. Edit Record\n\
                 5. Delete Record\n\
                 0. Back to Main Menu",
            )?;

            match self.prompt.choice(5)? {
                1 => self.add_record()?,
                2 => self.view_records()?,
                3 => self.search_records()?,
                4 => self.edit_record()?,
                5 => self.delete_record()?,
                _ => return Ok(()),
            }
        }
    }

    /// Show the patient list and return the ID of the chosen row.
    fn pick_patient(&mut self) -> io::Result<u32> {
        let table = render::patient_table(self.store.patients());
        self.prompt.say("\nSelect patient:")?;
        self.prompt.say(table)?;

        let count = self.store.patients().len();
        let row: usize = self
            .prompt
            .number(&format!("Patient number (1-{}): ", count), 1, count)?;
        Ok(self.store.patients().items()[row - 1].id)
    }

    /// Show the package list and return the ID of the chosen row.
    fn pick_package(&mut self) -> io::Result<u32> {
        let table = render::package_table(self.store.packages());
        self.prompt.say("\nSelect package:")?;
        self.prompt.say(table)?;

        let count = self.store.packages().len();
        let row: usize = self
            .prompt
            .number(&format!("Package number (1-{}): ", count), 1, count)?;
        Ok(self.store.packages().items()[row - 1].id)
    }

    /// Explain why a record cannot be created yet, if it cannot.
    fn record_blocker(&self) -> Option<&'static str> {
        if self.store.patients().is_empty() {
            Some("No patients registered. Add a patient first.")
        } else if self.store.packages().is_empty() {
            Some("No packages available. Add a package first.")
        } else {
            None
        }
    }

    fn add_record(&mut self) -> io::Result<()> {
        self.prompt.say(render::header("ADD CHECK-UP RECORD"))?;
        let records = self.store.records();
        if records.is_full() {
            return self.prompt.error(format_args!(
                "Cannot add more records: maximum capacity of {} reached",
                records.capacity()
            ));
        }
        if let Some(reason) = self.record_blocker() {
            return self.prompt.error(reason);
        }

        let patient_id = self.pick_patient()?;
        let package_id = self.pick_package()?;
        let date = self.prompt.date("Enter check-up date")?;

        match self.store.add_record(patient_id, package_id, date) {
            Ok(record) => self.prompt.success(format_args!(
                "Check-up record added successfully with ID: {}",
                record.id
            )),
            Err(e) => self.report_error(e),
        }
    }

    fn view_records(&mut self) -> io::Result<()> {
        self.prompt.say(render::header("ALL CHECK-UP RECORDS"))?;
        if self.store.records().is_empty() {
            return self.prompt.say("No check-up records yet.");
        }

        self.prompt.say(
            "Sort by:\n\
             1. Date (newest first)\n\
             2. Patient name\n\
             3. Package name\n\
             4. ID\n\
             0. Current order",
        )?;
        let sort = match self.prompt.choice(4)? {
            1 => Some(RecordSort::DateNewest),
            2 => Some(RecordSort::PatientName),
            3 => Some(RecordSort::PackageName),
            4 => Some(RecordSort::Id),
            _ => None,
        };
        if let Some(by) = sort {
            self.store.sort_records(by);
        }

        let table = render::record_table(self.store.records());
        self.prompt.say(table)?;
        self.prompt
            .say(format_args!("Total: {} record(s)", self.store.records().len()))
    }

    fn show_matches(&mut self, indices: &[usize]) -> io::Result<()> {
        if indices.is_empty() {
            return self.prompt.error("No matching records found.");
        }
        let table = render::record_table(
            indices.iter().filter_map(|&i| self.store.get_record(i)),
        );
        self.prompt.say(table)?;
        self.prompt
            .say(format_args!("{} record(s) found", indices.len()))
    }

    fn search_records(&mut self) -> io::Result<()> {
        self.prompt.say(render::header("SEARCH RECORDS"))?;
        self.prompt.say(
            "1. By patient name\n\
             2. By package name\n\
             3. By date\n\
             4. By record ID\n\
             0. Back",
        )?;

        let matches = match self.prompt.choice(4)? {
            1 => {
                let query = self.prompt.text("Enter patient name: ")?;
                self.store.search_records_by_patient_name(&query)
            }
            2 => {
                let query = self.prompt.text("Enter package name: ")?;
                self.store.search_records_by_package_name(&query)
            }
            3 => {
                let date = self.prompt.date("Enter date")?;
                self.store.search_records_by_date(date)
            }
            4 => {
                let id = self.read_id("Enter record ID: ")?;
                return match self
                    .store
                    .find_record_by_id(id)
                    .and_then(|i| self.store.get_record(i))
                {
                    Some(record) => {
                        let detail = render::record_detail(record);
                        self.prompt.say(detail)
                    }
                    None => self.prompt.error("Record not found."),
                };
            }
            _ => return Ok(()),
        };

        self.show_matches(&matches)
    }

    fn edit_record(&mut self) -> io::Result<()> {
        self.prompt.say(render::header("EDIT CHECK-UP RECORD"))?;
        let id = self.read_id("Enter record ID to edit: ")?;
        let Some(index) = self.store.find_record_by_id(id) else {
            return self.prompt.error("Record not found.");
        };

        if let Some(record) = self.store.get_record(index) {
            let detail = render::record_detail(record);
            self.prompt.say("Current data:")?;
            self.prompt.say(detail)?;
        }

        self.prompt.say(
            "\nWhat to change?\n\
             1. Patient\n\
             2. Package\n\
             3. Date\n\
             4. All fields\n\
             0. Cancel",
        )?;
        let field = self.prompt.choice(4)?;
        if field == 0 {
            return self.prompt.say("Edit cancelled.");
        }

        let mut changes = RecordChanges::default();
        if field == 1 || field == 4 {
            if self.store.patients().is_empty() {
                return self.prompt.error("No patients registered.");
            }
            changes.patient_id = Some(self.pick_patient()?);
        }
        if field == 2 || field == 4 {
            if self.store.packages().is_empty() {
                return self.prompt.error("No packages available.");
            }
            changes.package_id = Some(self.pick_package()?);
        }
        if field == 3 || field == 4 {
            changes.date = Some(self.prompt.date("Enter new check-up date")?);
        }

        match self.store.update_record(index, changes) {
            Ok(_) => self.prompt.success("Record updated successfully."),
            Err(e) => self.report_error(e),
        }
    }

    fn delete_record(&mut self) -> io::Result<()> {
        self.prompt.say(render::header("DELETE CHECK-UP RECORD"))?;
        let id = self.read_id("Enter record ID to delete: ")?;
        let Some(index) = self.store.find_record_by_id(id) else {
            return self.prompt.error("Record not found.");
        };

        if let Some(record) = self.store.get_record(index) {
            let detail = render::record_detail(record);
            self.prompt.say(detail)?;
        }
        if !self
            .prompt
            .confirm("Are you sure you want to delete this record? (y/n): ")?
        {
            return self.prompt.say("Deletion cancelled.");
        }

        match self.store.delete_record(index) {
            Ok(record) => self
                .prompt
                .success(format_args!("Record {} deleted successfully.", record.id)),
            Err(e) => self.report_error(e),
        }
    }
}
