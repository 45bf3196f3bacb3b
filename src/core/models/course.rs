//! Course model

use crate::core::planner::PlannerError;
use std::fmt;

/// Maximum number of characters in a department code (e.g., "CS", "PHY")
pub const MAX_DEPARTMENT_LEN: usize = 3;

/// Highest section number a course may carry
pub const MAX_SECTION: u8 = 127;

/// Represents a single course offering in a planner
///
/// Two courses are equal when all five fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Course {
    name: String,
    department: String,
    code: u32,
    section: u8,
    instructor: String,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `name` - Full course name (e.g., "Data Structures")
    /// * `department` - Department code, at most 3 characters (e.g., "CSE")
    /// * `code` - Course number (e.g., 214)
    /// * `section` - Section number, 0 to 127
    /// * `instructor` - Instructor name
    ///
    /// # Errors
    /// Returns [`PlannerError::InvalidDepartment`] or [`PlannerError::InvalidSection`]
    /// when the department or section are out of range.
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        code: u32,
        section: u8,
        instructor: impl Into<String>,
    ) -> Result<Self, PlannerError> {
        let department = department.into();
        validate_department(&department)?;
        validate_section(section)?;

        Ok(Self {
            name: name.into(),
            department,
            code,
            section,
            instructor: instructor.into(),
        })
    }

    /// Course name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Department code
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Course number
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// Section number
    #[must_use]
    pub const fn section(&self) -> u8 {
        self.section
    }

    /// Instructor name
    #[must_use]
    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    /// Set the course name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the instructor name
    pub fn set_instructor(&mut self, instructor: impl Into<String>) {
        self.instructor = instructor.into();
    }

    /// Set the department code
    ///
    /// # Errors
    /// Returns [`PlannerError::InvalidDepartment`] when the code is longer than
    /// [`MAX_DEPARTMENT_LEN`] characters. The course is left unchanged.
    pub fn set_department(&mut self, department: impl Into<String>) -> Result<(), PlannerError> {
        let department = department.into();
        validate_department(&department)?;
        self.department = department;
        Ok(())
    }

    /// Set the course number
    pub fn set_code(&mut self, code: u32) {
        self.code = code;
    }

    /// Set the section number
    ///
    /// # Errors
    /// Returns [`PlannerError::InvalidSection`] when `section` exceeds [`MAX_SECTION`].
    pub fn set_section(&mut self, section: u8) -> Result<(), PlannerError> {
        validate_section(section)?;
        self.section = section;
        Ok(())
    }

    /// Short label used in status messages
    ///
    /// # Returns
    /// A string in the format "DEPT CODE.SECTION" (e.g., "CSE 214.1")
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}.{}", self.department, self.code, self.section)
    }
}

fn validate_department(department: &str) -> Result<(), PlannerError> {
    if department.chars().count() > MAX_DEPARTMENT_LEN {
        return Err(PlannerError::InvalidDepartment(department.to_string()));
    }
    Ok(())
}

fn validate_section(section: u8) -> Result<(), PlannerError> {
    if section > MAX_SECTION {
        return Err(PlannerError::InvalidSection(section));
    }
    Ok(())
}

/// One fixed-width table row, without the position column.
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<30} {:<15} {:<5} {:<10} {}",
            self.name, self.department, self.code, self.section, self.instructor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_structures() -> Course {
        Course::new("Data Structures", "CSE", 214, 1, "Ahmadi").unwrap()
    }

    #[test]
    fn test_course_creation() {
        let course = data_structures();

        assert_eq!(course.name(), "Data Structures");
        assert_eq!(course.department(), "CSE");
        assert_eq!(course.code(), 214);
        assert_eq!(course.section(), 1);
        assert_eq!(course.instructor(), "Ahmadi");
    }

    #[test]
    fn test_creation_rejects_long_department() {
        let err = Course::new("Calculus", "MATH", 125, 1, "Kim").unwrap_err();
        assert_eq!(err, PlannerError::InvalidDepartment("MATH".to_string()));
    }

    #[test]
    fn test_creation_rejects_section_above_range() {
        let err = Course::new("Calculus", "AMS", 161, 128, "Kim").unwrap_err();
        assert_eq!(err, PlannerError::InvalidSection(128));
    }

    #[test]
    fn test_department_counts_characters_not_bytes() {
        assert!(Course::new("Éthique", "ÉTH", 100, 0, "Roy").is_ok());
    }

    #[test]
    fn test_set_department() {
        let mut course = data_structures();

        course.set_department("AMS").unwrap();
        assert_eq!(course.department(), "AMS");

        assert!(course.set_department("CSEE").is_err());
        assert_eq!(course.department(), "AMS");
    }

    #[test]
    fn test_set_section_validates_incoming_value() {
        let mut course = data_structures();

        course.set_section(127).unwrap();
        assert_eq!(course.section(), 127);

        assert_eq!(course.set_section(200), Err(PlannerError::InvalidSection(200)));
        assert_eq!(course.section(), 127);
    }

    #[test]
    fn test_unconstrained_setters() {
        let mut course = data_structures();
        course.set_name("Computer Science II");
        course.set_instructor("Esmaili");
        course.set_code(0);

        assert_eq!(course.name(), "Computer Science II");
        assert_eq!(course.instructor(), "Esmaili");
        assert_eq!(course.code(), 0);
    }

    #[test]
    fn test_equality_is_structural() {
        let a = data_structures();
        let b = data_structures();
        assert_eq!(a, b);

        let mut c = data_structures();
        c.set_instructor("Someone Else");
        assert_ne!(a, c);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = data_structures();
        let mut copy = original.clone();
        copy.set_name("Changed");

        assert_eq!(original.name(), "Data Structures");
        assert_eq!(copy.name(), "Changed");
    }

    #[test]
    fn test_label() {
        assert_eq!(data_structures().label(), "CSE 214.1");
    }

    #[test]
    fn test_display_is_fixed_width() {
        let row = data_structures().to_string();
        assert!(row.starts_with("Data Structures "));
        assert_eq!(&row[31..46], "CSE            ");
        assert!(row.ends_with("Ahmadi"));
    }
}
