//! Natural ordering of switch port names (`Ethernet2` before `Ethernet10`).

use metalctl_types::SwitchNicWithMachine;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

static NUMBER_GROUPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Compares two interface names by their numeric groups.
///
/// Groups are compared pairwise as integers of arbitrary length. When one
/// name's groups are a prefix of the other's, the name with more groups comes
/// first (`swp1s0` before `swp1`). Remaining ties fall back to plain string
/// order.
pub fn compare_interface_names(a: &str, b: &str) -> Ordering {
    let mut a_groups = NUMBER_GROUPS.find_iter(a).map(|m| m.as_str());
    let mut b_groups = NUMBER_GROUPS.find_iter(b).map(|m| m.as_str());

    loop {
        match (a_groups.next(), b_groups.next()) {
            (Some(x), Some(y)) => match compare_digits(x, y) {
                Ordering::Equal => continue,
                other => return other,
            },
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => return a.cmp(b),
        }
    }
}

fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Orders connections by the name of their switch port. Connections without a
/// NIC sort as an empty name.
pub fn sort_connections(connections: &mut [SwitchNicWithMachine]) {
    fn name(c: &SwitchNicWithMachine) -> &str {
        c.nic.as_ref().map_or("", |n| n.name.as_str())
    }

    connections.sort_by(|a, b| compare_interface_names(name(a), name(b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&'static str]) -> Vec<&'static str> {
        let mut names = names.to_vec();
        names.sort_by(|a, b| compare_interface_names(a, b));
        names
    }

    #[test]
    fn test_numbers_compare_as_integers() {
        assert_eq!(
            sorted(&["Ethernet10", "Ethernet2", "Ethernet1"]),
            vec!["Ethernet1", "Ethernet2", "Ethernet10"]
        );
    }

    #[test]
    fn test_more_groups_sort_first() {
        assert_eq!(sorted(&["swp1", "swp1s1", "swp1s0"]), vec!["swp1s0", "swp1s1", "swp1"]);
    }

    #[test]
    fn test_equal_numbers_fall_back_to_string_order() {
        assert_eq!(sorted(&["swp01", "swp1", "eth1"]), vec!["eth1", "swp01", "swp1"]);
    }

    #[test]
    fn test_huge_numbers_do_not_overflow() {
        let big = "port99999999999999999999999";
        assert_eq!(compare_interface_names(big, "port1"), Ordering::Greater);
    }

    #[test]
    fn test_order_is_consistent_in_both_directions() {
        let names = ["lo", "swp1", "swp1s0", "swp2", "Ethernet0", "Ethernet10", "Ethernet4"];
        for a in names {
            for b in names {
                assert_eq!(
                    compare_interface_names(a, b),
                    compare_interface_names(b, a).reverse(),
                    "{} vs {}",
                    a,
                    b
                );
            }
        }
    }
}
