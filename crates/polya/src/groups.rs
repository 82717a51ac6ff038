//! Constructors for the classical named groups.
//!
//! Each group is defined by a fixed, literal generator list and built through
//! the generic generator-closure machinery; nothing here is special-cased.

use polya_perm::{
    reflection, rotation, transposition, GroupError, Permutation, PermutationGroup,
};

/// The cyclic group `C_d`: rotations of a necklace with `d` beads.
///
/// # Errors
///
/// Construction of the literal generators cannot fail; any error comes from
/// group assembly itself.
pub fn cyclic(degree: usize) -> Result<PermutationGroup, GroupError> {
    PermutationGroup::from_generators(format!("C_{degree}"), degree, &[rotation(degree)])
}

/// The dihedral group `D_d`: rotations and reflections of a bracelet with
/// `d` beads; order `2d` for `d >= 3`.
///
/// # Errors
///
/// Construction of the literal generators cannot fail; any error comes from
/// group assembly itself.
pub fn dihedral(degree: usize) -> Result<PermutationGroup, GroupError> {
    PermutationGroup::from_generators(
        format!("D_{degree}"),
        degree,
        &[rotation(degree), reflection(degree)],
    )
}

/// The symmetric group `S_d`: all `d!` permutations, generated by a
/// transposition and a full rotation.
///
/// # Errors
///
/// Construction of the literal generators cannot fail; any error comes from
/// group assembly itself.
pub fn symmetric(degree: usize) -> Result<PermutationGroup, GroupError> {
    let name = format!("S_{degree}");
    if degree < 2 {
        return PermutationGroup::from_generators(name, degree, &[]);
    }
    let generators = [transposition(degree, 0, 1)?, rotation(degree)];
    PermutationGroup::from_generators(name, degree, &generators)
}

/// The trivial group on `d` positions: only the identity acts.
///
/// # Errors
///
/// Construction cannot fail for any degree; the `Result` mirrors the other
/// constructors.
pub fn trivial(degree: usize) -> Result<PermutationGroup, GroupError> {
    PermutationGroup::from_elements(
        format!("Trivial_{degree}"),
        vec![Permutation::identity(degree)],
    )
}

/// The rotation group of the regular tetrahedron acting on its four
/// vertices; isomorphic to `A_4`, order 12.
///
/// # Errors
///
/// Construction of the literal generators cannot fail; any error comes from
/// group assembly itself.
pub fn tetrahedron() -> Result<PermutationGroup, GroupError> {
    let generators = [
        Permutation::from_cycles(4, &[vec![0, 1, 2]])?,
        Permutation::from_cycles(4, &[vec![1, 2, 3]])?,
    ];
    PermutationGroup::from_generators("Tetrahedron", 4, &generators)
}

/// The rotation group of the cube acting on its six faces; isomorphic to
/// `S_4`, order 24.
///
/// Faces are labelled 0 = up, 1 = down, 2 = front, 3 = back, 4 = left,
/// 5 = right; the generators are quarter turns about the vertical and
/// front-back axes.
///
/// # Errors
///
/// Construction of the literal generators cannot fail; any error comes from
/// group assembly itself.
pub fn cube() -> Result<PermutationGroup, GroupError> {
    let generators = [
        Permutation::from_cycles(6, &[vec![2, 5, 3, 4]])?,
        Permutation::from_cycles(6, &[vec![0, 5, 1, 4]])?,
    ];
    PermutationGroup::from_generators("Cube", 6, &generators)
}
