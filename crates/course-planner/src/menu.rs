//! Interactive menu loop.
//!
//! Generic over its reader and writer so the whole dialogue can be driven from
//! tests. End of input behaves like choosing Exit.

use crate::error::PlannerError;
use crate::planner::Planner;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1
    Load,
    /// 2
    PrintSchedule,
    /// 3
    PrintCourse,
    /// 4
    Benchmark,
    /// 9
    Exit,
}

impl MenuChoice {
    /// Map a menu number to an option.
    #[must_use]
    pub const fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::Load),
            2 => Some(Self::PrintSchedule),
            3 => Some(Self::PrintCourse),
            4 => Some(Self::Benchmark),
            9 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Menu session over a planner.
pub struct Menu<'p, R, W> {
    planner: &'p mut Planner,
    catalog: PathBuf,
    input: R,
    output: W,
}

impl<'p, R: BufRead, W: Write> Menu<'p, R, W> {
    /// Create a session that loads `catalog` when option 1 is chosen.
    pub fn new(planner: &'p mut Planner, catalog: impl Into<PathBuf>, input: R, output: W) -> Self {
        Self {
            planner,
            catalog: catalog.into(),
            input,
            output,
        }
    }

    /// Run until Exit or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to Course Planner.")?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.read_choice()? else {
                break;
            };

            let keep_going = match choice {
                MenuChoice::Load => self.load().map(|()| true),
                MenuChoice::PrintSchedule => self.print_schedule().map(|()| true),
                MenuChoice::PrintCourse => self.print_course(),
                MenuChoice::Benchmark => self.benchmark(),
                MenuChoice::Exit => Ok(false),
            };

            match keep_going {
                Ok(true) => {}
                Ok(false) => break,
                Err(PlannerError::NotLoaded) => {
                    writeln!(self.output, "{}", PlannerError::NotLoaded)?;
                }
                Err(PlannerError::Io(err)) => return Err(err),
                Err(err @ PlannerError::Catalog(_)) => {
                    tracing::error!("{err}");
                    writeln!(
                        self.output,
                        "ERROR: File could not be opened. Ensure the CSV is in the working directory."
                    )?;
                }
            }
        }

        writeln!(self.output)?;
        writeln!(
            self.output,
            "Thank you for using the course planner. See you soon."
        )?;
        self.output.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let primary = self.planner.primary_kind();
        writeln!(self.output)?;
        writeln!(self.output, "Menu:")?;
        writeln!(self.output, "  1. Load Courses")?;
        writeln!(self.output, "  2. Print Schedule ({primary})")?;
        writeln!(self.output, "  3. Print Course ({primary})")?;
        writeln!(self.output, "  4. Benchmark Search (BST vs AVL)")?;
        writeln!(self.output, "  9. Exit")
    }

    /// `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn read_choice(&mut self) -> io::Result<Option<MenuChoice>> {
        loop {
            write!(self.output, "Enter selection: ")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match line.parse::<i64>() {
                Ok(n) => match MenuChoice::from_number(n) {
                    Some(choice) => return Ok(Some(choice)),
                    None => {
                        writeln!(self.output, "{n} is not a valid menu option. Try again.")?;
                        self.print_menu()?;
                    }
                },
                Err(_) => writeln!(self.output, "Not a valid input. Try a number.")?,
            }
        }
    }

    fn load(&mut self) -> Result<(), PlannerError> {
        let count = self.planner.load(&self.catalog)?;
        writeln!(self.output, "{count} courses read")?;
        for warning in self.planner.warnings() {
            writeln!(self.output, "{warning}")?;
        }
        Ok(())
    }

    fn print_schedule(&mut self) -> Result<(), PlannerError> {
        let schedule = self.planner.schedule()?;
        writeln!(self.output)?;
        writeln!(self.output, "Here is a sample schedule:")?;
        writeln!(self.output)?;
        for course in schedule {
            writeln!(self.output, "{course}")?;
        }
        Ok(())
    }

    /// `Ok(false)` if input ended while waiting for the course ID.
    fn print_course(&mut self) -> Result<bool, PlannerError> {
        if !self.planner.is_loaded() {
            return Err(PlannerError::NotLoaded);
        }

        writeln!(self.output, "What course do you want to know about?")?;
        let Some(input) = self.read_line()? else {
            return Ok(false);
        };

        let lookup = self.planner.lookup(&input)?;
        match lookup.course {
            Some(course) => writeln!(self.output, "{}\n", course.details())?,
            None => writeln!(self.output, "Course Id {} not found.\n", lookup.key)?,
        }
        Ok(true)
    }

    /// `Ok(false)` if input ended while waiting for the iteration count.
    fn benchmark(&mut self) -> Result<bool, PlannerError> {
        if !self.planner.is_loaded() {
            return Err(PlannerError::NotLoaded);
        }

        let prompt = "Iterations per courseId (e.g., 10000): ";
        let iterations = loop {
            write!(self.output, "{prompt}")?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            match line.parse::<usize>() {
                Ok(n) => break n,
                Err(_) => writeln!(self.output, "Not a valid input. Enter a positive integer.")?,
            }
        };

        self.planner.benchmark(iterations, &mut self.output)?;
        Ok(true)
    }
}
