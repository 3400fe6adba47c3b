//! Package management screens.

use std::io::{self, BufRead, Write};

use mcu_core::{PackageChanges, PackageSort};

use super::Session;
use crate::render;

impl<R: BufRead, W: Write> Session<R, W> {
    pub(super) fn package_menu(&mut self) -> io::Result<()> {
        loop {
            self.prompt.say(render::header("PACKAGE MANAGEMENT"))?;
            self.prompt.say(
                "1. Add Package\n\
                 2. View All Packages\n\
                 3. Search Package\n\
                 4. Update Package\n\
                 5. Delete Package\n\
                 0. Back to Main Menu",
            )?;

            match self.prompt.choice(5)? {
                1 => self.add_package()?,
                2 => self.view_packages()?,
                3 => self.search_package()?,
                4 => self.update_package()?,
                5 => self.delete_package()?,
                _ => return Ok(()),
            }
        }
    }

    fn add_package(&mut self) -> io::Result<()> {
        self.prompt.say(render::header("ADD NEW PACKAGE"))?;
        let packages = self.store.packages();
        if packages.is_full() {
            return self.prompt.error(format_args!(
                "Cannot add more packages: maximum capacity of {} reached",
                packages.capacity()
            ));
        }

        let name = self.prompt.text("Enter package name: ")?;
        let category = self.prompt.category()?;
        let price = self.prompt.price("Enter price: ")?;

        match self.store.add_package(&name, category, price) {
            Ok(package) => self.prompt.success(format_args!(
                "Package added successfully with ID: {}",
                package.id
            )),
            Err(e) => self.report_error(e),
        }
    }

    fn view_packages(&mut self) -> io::Result<()> {
        self.prompt.say(render::header("ALL PACKAGES"))?;
        if self.store.packages().is_empty() {
            return self.prompt.say("No packages available.");
        }

        self.prompt.say(
            "Sort by:\n\
             1. Name (A-Z)\n\
             2. Price (lowest first)\n\
             3. Category\n\
             4. ID\n\
             0. Current order",
        )?;
        let sort = match self.prompt.choice(4)? {
            1 => Some(PackageSort::Name),
            2 => Some(PackageSort::Price),
            3 => Some(PackageSort::Category),
            4 => Some(PackageSort::Id),
            _ => None,
        };
        if let Some(by) = sort {
            self.store.sort_packages(by);
        }

        let table = render::package_table(self.store.packages());
        self.prompt.say(table)?;
        self.prompt
            .say(format_args!("Total: {} package(s)", self.store.packages().len()))
    }

    fn search_package(&mut self) -> io::Result<()> {
        self.prompt.say(render::header("SEARCH PACKAGE"))?;
        self.prompt
            .say("1. Search by name\n2. Search by ID\n3. List by category\n0. Back")?;

        let found = match self.prompt.choice(3)? {
            1 => {
                let query = self.prompt.text("Enter name to search: ")?;
                self.store.search_package_by_name(&query)
            }
            2 => {
                let id = self.read_id("Enter package ID: ")?;
                self.store.find_package_by_id(id)
            }
            3 => return self.list_packages_by_category(),
            _ => return Ok(()),
        };

        match found.and_then(|i| self.store.get_package(i)) {
            Some(package) => {
                let detail = render::package_detail(package);
                self.prompt.say("Package found:")?;
                self.prompt.say(detail)
            }
            None => self.prompt.error("Package not found."),
        }
    }

    fn list_packages_by_category(&mut self) -> io::Result<()> {
        let category = self.prompt.category()?;
        let indices = self.store.find_packages_by_category(category);
        if indices.is_empty() {
            return self
                .prompt
                .say(format_args!("No packages in category {}.", category));
        }

        let table = render::package_table(
            indices.iter().filter_map(|&i| self.store.get_package(i)),
        );
        self.prompt.say(table)?;
        self.prompt
            .say(format_args!("{} package(s) found", indices.len()))
    }

    fn update_package(&mut self) -> io::Result<()> {
        self.prompt.say(render::header("UPDATE PACKAGE"))?;
        let id = self.read_id("Enter package ID to update: ")?;
        let Some(index) = self.store.find_package_by_id(id) else {
            return self.prompt.error("Package not found.");
        };

        if let Some(package) = self.store.get_package(index) {
            let detail = render::package_detail(package);
            self.prompt.say("Current data:")?;
            self.prompt.say(detail)?;
        }

        self.prompt.say(
            "\nWhat to update?\n\
             1. Name\n\
             2. Category\n\
             3. Price\n\
             4. All fields\n\
             0. Cancel",
        )?;
        let field = self.prompt.choice(4)?;
        if field == 0 {
            return self.prompt.say("Update cancelled.");
        }

        let mut changes = PackageChanges::default();
        if field == 1 || field == 4 {
            changes.name = Some(self.prompt.text("Enter new name: ")?);
        }
        if field == 2 || field == 4 {
            changes.category = Some(self.prompt.category()?);
        }
        if field == 3 || field == 4 {
            changes.price = Some(self.prompt.price("Enter new price: ")?);
        }

        match self.store.update_package(index, changes) {
            Ok(_) => self.prompt.success(
                "Package updated successfully. Existing records keep the old details.",
            ),
            Err(e) => self.report_error(e),
        }
    }

    fn delete_package(&mut self) -> io::Result<()> {
        self.prompt.say(render::header("DELETE PACKAGE"))?;
        let id = self.read_id("Enter package ID to delete: ")?;
        let Some(index) = self.store.find_package_by_id(id) else {
            return self.prompt.error("Package not found.");
        };

        if let Some(package) = self.store.get_package(index) {
            let detail = render::package_detail(package);
            self.prompt.say(detail)?;
        }
        if !self
            .prompt
            .confirm("Are you sure you want to delete this package? (y/n): ")?
        {
            return self.prompt.say("Deletion cancelled.");
        }

        match self.store.delete_package(index) {
            Ok(package) => self
                .prompt
                .success(format_args!("Package {} deleted successfully.", package.name)),
            Err(e) => self.report_error(e),
        }
    }
}
