//! CSV employee import.
//!
//! Alternate flat-file source for the employee list. The field order is
//! fixed: `name,region,level,hireDate,hours,sickDays,breach`. An empty
//! level field decodes to unset, the breach field decodes from the
//! literal `true` token, and unrecognized region tags decode to
//! [`Region::Unknown`] (which the allocator then excludes from both
//! regions).

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Level, Region};

/// Number of fields in one employee record.
const FIELD_COUNT: usize = 7;

/// Parses an employee list from CSV text.
///
/// Blank lines are skipped; any malformed record aborts the whole import
/// with an error naming the 1-based line, so a failed import never
/// yields a partial employee list.
///
/// # Example
///
/// ```
/// use bonus_engine::io::import_csv;
/// use bonus_engine::models::{Level, Region};
///
/// let employees = import_csv("Ada,JY,2,2015-03-01,1400,2,false\n").unwrap();
/// assert_eq!(employees.len(), 1);
/// assert_eq!(employees[0].region, Region::Jy);
/// assert_eq!(employees[0].level, Some(Level::Two));
/// ```
pub fn import_csv(csv: &str) -> EngineResult<Vec<Employee>> {
    let mut employees = Vec::new();

    for (index, raw_line) in csv.trim().lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != FIELD_COUNT {
            return Err(EngineError::CsvParse {
                line: line_number,
                message: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
            });
        }

        employees.push(parse_record(&fields, line_number)?);
    }

    Ok(employees)
}

fn parse_record(fields: &[&str], line: usize) -> EngineResult<Employee> {
    let region = match fields[1] {
        "SJ" => Region::Sj,
        "JY" => Region::Jy,
        _ => Region::Unknown,
    };

    let level = if fields[2].is_empty() {
        None
    } else {
        let raw: u8 = fields[2].parse().map_err(|_| EngineError::CsvParse {
            line,
            message: format!("invalid level '{}'", fields[2]),
        })?;
        Some(Level::try_from(raw).map_err(|message| EngineError::CsvParse { line, message })?)
    };

    let hire_date =
        NaiveDate::parse_from_str(fields[3], "%Y-%m-%d").map_err(|_| EngineError::CsvParse {
            line,
            message: format!("invalid hire date '{}', expected YYYY-MM-DD", fields[3]),
        })?;

    let hours: f64 = fields[4].parse().map_err(|_| EngineError::CsvParse {
        line,
        message: format!("invalid hours '{}'", fields[4]),
    })?;

    let sick_days: f64 = fields[5].parse().map_err(|_| EngineError::CsvParse {
        line,
        message: format!("invalid sick days '{}'", fields[5]),
    })?;

    Ok(Employee {
        name: fields[0].to_string(),
        region,
        level,
        hire_date,
        hours,
        sick_days,
        breach: fields[6] == "true",
    })
}
