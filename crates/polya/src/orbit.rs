//! Burnside's orbit-counting theorem.

use num_traits::Zero;

use polya_perm::PermutationGroup;
use polya_rational::Rational;

use crate::enumeration::{integral_count, EnumerationError};

/// Counts the orbits of colourings under the group's action.
///
/// Each element fixes exactly `colour_count^(number of cycles)` colourings;
/// the orbit count is the average of these over the group. The intermediate
/// per-element terms are not individually integral, so the sum is accumulated
/// as exact rationals and converted once at the end.
///
/// # Errors
///
/// Returns [`EnumerationError::NonIntegralCount`] if the averaged sum is not
/// an integer — by Burnside's theorem this can only happen when the supplied
/// element set is not actually a group.
pub fn count_orbits(
    group: &PermutationGroup,
    colour_count: u32,
) -> Result<u64, EnumerationError> {
    let weight = Rational::new(1, i64::try_from(group.order()).unwrap_or(i64::MAX))?;
    let base = Rational::from(colour_count);
    let total = group
        .elements()
        .iter()
        .fold(Rational::zero(), |sum, element| {
            let cycles = element.cycle_structure().total_cycle_count();
            let fixed = base.pow(u32::try_from(cycles).unwrap_or(u32::MAX));
            sum + fixed * &weight
        });
    integral_count(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups;
    use polya_perm::{rotation, PermutationGroup};

    #[test]
    fn trivial_group_counts_all_colourings() {
        let group = groups::trivial(3).unwrap();
        assert_eq!(count_orbits(&group, 2).unwrap(), 8);
    }

    #[test]
    fn single_colour_always_gives_one_orbit() {
        let group = groups::cyclic(5).unwrap();
        assert_eq!(count_orbits(&group, 1).unwrap(), 1);
    }

    #[test]
    fn necklace_of_four_beads_in_two_colours() {
        let group = groups::cyclic(4).unwrap();
        assert_eq!(count_orbits(&group, 2).unwrap(), 6);
    }

    #[test]
    fn necklace_of_four_beads_in_three_colours() {
        let group = groups::cyclic(4).unwrap();
        assert_eq!(count_orbits(&group, 3).unwrap(), 24);
    }

    #[test]
    fn bracelet_of_four_beads() {
        let group = groups::dihedral(4).unwrap();
        assert_eq!(count_orbits(&group, 2).unwrap(), 6);
        assert_eq!(count_orbits(&group, 3).unwrap(), 21);
    }

    #[test]
    fn a_defective_group_surfaces_a_non_integral_count() {
        // Not closed: fixed-colouring counts 8, 2, and 4 average to 14/3.
        let broken = PermutationGroup::from_elements(
            "broken",
            vec![
                polya_perm::Permutation::identity(3),
                rotation(3),
                polya_perm::transposition(3, 0, 1).unwrap(),
            ],
        )
        .unwrap();
        assert!(!broken.is_valid_group());
        assert!(matches!(
            count_orbits(&broken, 2),
            Err(EnumerationError::NonIntegralCount(_))
        ));
    }
}
