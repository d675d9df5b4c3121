//! Machine listing search and sort.

use chrono::TimeZone;
use docportal_core::{DateNormalizer, Machine};
use serde::{Deserialize, Serialize};

use crate::query::contains_ignore_case;
use crate::sort::{compare_dates, SortDirection};

/// Sort options offered on the machines page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineSort {
    /// Name, A to Z.
    #[default]
    Name,
    /// Serial number, ascending.
    Serial,
    /// Installation date, newest first.
    #[serde(rename = "date")]
    InstallationDate,
}

/// Machines whose name or serial number contains `term`, ignoring case.
pub fn filter_machines(machines: &[Machine], term: &str) -> Vec<Machine> {
    let term_lower = term.to_lowercase();
    machines
        .iter()
        .filter(|m| {
            contains_ignore_case(&m.name, &term_lower)
                || contains_ignore_case(&m.serial_number, &term_lower)
        })
        .cloned()
        .collect()
}

/// Stable sort in place. Unparseable installation dates go last.
pub fn sort_machines<Tz: TimeZone>(
    machines: &mut [Machine],
    sort: MachineSort,
    dates: &DateNormalizer<Tz>,
) where
    Tz::Offset: std::fmt::Display,
{
    match sort {
        MachineSort::Name => machines.sort_by_cached_key(|m| m.name.to_lowercase()),
        MachineSort::Serial => machines.sort_by_cached_key(|m| m.serial_number.to_lowercase()),
        MachineSort::InstallationDate => {
            let mut keyed: Vec<_> = machines
                .iter()
                .map(|m| (dates.parse(&m.installation_date), m.clone()))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| compare_dates(a, b, SortDirection::Descending));
            for (slot, (_, machine)) in machines.iter_mut().zip(keyed) {
                *slot = machine;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use docportal_core::MachineStatus;

    fn machine(id: &str, name: &str, serial: &str, installed: &str) -> Machine {
        Machine {
            id: id.to_string(),
            name: name.to_string(),
            serial_number: serial.to_string(),
            image_url: None,
            status: MachineStatus::Operational,
            installation_date: installed.to_string(),
            location: "Plant 1".to_string(),
            is_new: false,
            document_count: 0,
        }
    }

    fn ids(machines: &[Machine]) -> Vec<&str> {
        machines.iter().map(|m| m.id.as_str()).collect()
    }

    fn fleet() -> Vec<Machine> {
        vec![
            machine("1", "press line", "SN-300", "2021-05-01"),
            machine("2", "Bender", "SN-100", "2023-01-10"),
            machine("3", "cutter", "SN-200", "not recorded"),
        ]
    }

    #[test]
    fn test_filter_by_name_or_serial() {
        assert_eq!(ids(&filter_machines(&fleet(), "BEND")), vec!["2"]);
        assert_eq!(ids(&filter_machines(&fleet(), "sn-3")), vec!["1"]);
        assert_eq!(filter_machines(&fleet(), "").len(), 3);
    }

    #[test]
    fn test_sort_by_name() {
        let mut machines = fleet();
        sort_machines(&mut machines, MachineSort::Name, &DateNormalizer::new(Utc));
        assert_eq!(ids(&machines), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_sort_by_serial() {
        let mut machines = fleet();
        sort_machines(&mut machines, MachineSort::Serial, &DateNormalizer::new(Utc));
        assert_eq!(ids(&machines), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_sort_by_date_newest_first_invalid_last() {
        let mut machines = fleet();
        sort_machines(
            &mut machines,
            MachineSort::InstallationDate,
            &DateNormalizer::new(Utc),
        );
        assert_eq!(ids(&machines), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_machine_sort_serde() {
        let sort: MachineSort = serde_json::from_str("\"date\"").unwrap();
        assert_eq!(sort, MachineSort::InstallationDate);
        assert_eq!(MachineSort::default(), MachineSort::Name);
    }
}
