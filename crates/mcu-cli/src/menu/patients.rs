//! Patient management screens.

use std::io::{self, BufRead, Write};

use mcu_core::models::MAX_AGE;
use mcu_core::{PatientChanges, PatientSort};

use super::Session;
use crate::render;

impl<R: BufRead, W: Write> Session<R, W> {
    pub(super) fn patient_menu(&mut self) -> io::Result<()> {
        loop {
            self.prompt.say(render::header("PATIENT MANAGEMENT"))?;
            self.prompt.say(
                "1. Add Patient\n\
                 2. View All Patients\n\
                 3. Search Patient\n\
                 4. Update Patient\n\
                 5. Delete Patient\n\
                 0. Back to Main Menu",
            )?;

            match self.prompt.choice(5)? {
                1 => self.add_patient()?,
                2 => self.view_patients()?,
                3 => self.search_patient()?,
                4 => self.update_patient()?,
                5 => self.delete_patient()?,
                _ => return Ok(()),
            }
        }
    }

    fn read_age(&mut self) -> io::Result<u32> {
        self.prompt
            .number(&format!("Enter age (0-{}): ", MAX_AGE), 0, MAX_AGE)
    }

    fn add_patient(&mut self) -> io::Result<()> {
        self.prompt.say(render::header("ADD NEW PATIENT"))?;
        let patients = self.store.patients();
        if patients.is_full() {
            return self.prompt.error(format_args!(
                "Cannot add more patients: maximum capacity of {} reached",
                patients.capacity()
            ));
        }

        let name = self.prompt.text("Enter patient name: ")?;
        let gender = self.prompt.gender()?;
        let age = self.read_age()?;

        match self.store.add_patient(&name, gender, age) {
            Ok(patient) => self.prompt.success(format_args!(
                "Patient added successfully with ID: {}",
                patient.id
            )),
            Err(e) => self.report_error(e),
        }
    }

    fn view_patients(&mut self) -> io::Result<()> {
        self.prompt.say(render::header("ALL PATIENTS"))?;
        if self.store.patients().is_empty() {
            return self.prompt.say("No patients registered.");
        }

        self.prompt.say(
            "Sort by:\n\
             1. Name (A-Z)\n\
             2. Age (youngest first)\n\
             3. ID\n\
             0. Current order",
        )?;
        let sort = match self.prompt.choice(3)? {
            1 => Some(PatientSort::Name),
            2 => Some(PatientSort::Age),
            3 => Some(PatientSort::Id),
            _ => None,
        };
        if let Some(by) = sort {
            self.store.sort_patients(by);
        }

        let table = render::patient_table(self.store.patients());
        self.prompt.say(table)?;
        self.prompt
            .say(format_args!("Total: {} patient(s)", self.store.patients().len()))
    }

    fn search_patient(&mut self) -> io::Result<()> {
        self.prompt.say(render::header("SEARCH PATIENT"))?;
        self.prompt.say("1. Search by name\n2. Search by ID\n0. Back")?;

        let found = match self.prompt.choice(2)? {
            1 => {
                let query = self.prompt.text("Enter name to search: ")?;
                self.store.search_patient_by_name(&query)
            }
            2 => {
                let id = self.read_id("Enter patient ID: ")?;
                self.store.find_patient_by_id(id)
            }
            _ => return Ok(()),
        };

        match found.and_then(|i| self.store.get_patient(i)) {
            Some(patient) => {
                let detail = render::patient_detail(patient);
                self.prompt.say("Patient found:")?;
                self.prompt.say(detail)
            }
            None => self.prompt.error("Patient not found."),
        }
    }

    fn update_patient(&mut self) -> io::Result<()> {
        self.prompt.say(render::header("UPDATE PATIENT"))?;
        let id = self.read_id("Enter patient ID to update: ")?;
        let Some(index) = self.store.find_patient_by_id(id) else {
            return self.prompt.error("Patient not found.");
        };

        if let Some(patient) = self.store.get_patient(index) {
            let detail = render::patient_detail(patient);
            self.prompt.say("Current data:")?;
            self.prompt.say(detail)?;
        }

        self.prompt.say(
            "\nWhat to update?\n\
             1. Name\n\
             2. Gender\n\
             3. Age\n\
             4. All fields\n\
             0. Cancel",
        )?;
        let field = self.prompt.choice(4)?;
        if field == 0 {
            return self.prompt.say("Update cancelled.");
        }

        let mut changes = PatientChanges::default();
        if field == 1 || field == 4 {
            changes.name = Some(self.prompt.text("Enter new name: ")?);
        }
        if field == 2 || field == 4 {
            changes.gender = Some(self.prompt.gender()?);
        }
        if field == 3 || field == 4 {
            changes.age = Some(self.read_age()?);
        }

        match self.store.update_patient(index, changes) {
            Ok(_) => self.prompt.success("Patient updated successfully."),
            Err(e) => self.report_error(e),
        }
    }

    fn delete_patient(&mut self) -> io::Result<()> {
        self.prompt.say(render::header("DELETE PATIENT"))?;
        let id = self.read_id("Enter patient ID to delete: ")?;
        let Some(index) = self.store.find_patient_by_id(id) else {
            return self.prompt.error("Patient not found.");
        };

        if let Some(patient) = self.store.get_patient(index) {
            let detail = render::patient_detail(patient);
            self.prompt.say(detail)?;
        }
        self.prompt
            .warning("Existing check-up records keep their copy of this patient.")?;
        if !self
            .prompt
            .confirm("Are you sure you want to delete this patient? (y/n): ")?
        {
            return self.prompt.say("Deletion cancelled.");
        }

        match self.store.delete_patient(index) {
            Ok(patient) => self
                .prompt
                .success(format_args!("Patient {} deleted successfully.", patient.name)),
            Err(e) => self.report_error(e),
        }
    }
}
