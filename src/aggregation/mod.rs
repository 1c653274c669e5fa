//! Pure summarisation over row snapshots.
//!
//! Every function here takes a borrowed snapshot and returns owned summary
//! rows. Nothing in this module performs I/O.

pub mod filters;
pub mod putwall;
pub mod replenishment;
pub mod unitsort;

/// `numerator / denominator` rounded half-up to an integer. A zero denominator
/// yields 0.
pub fn rounded_ratio(numerator: i64, denominator: i64) -> i64 {
    round_half_up(i128::from(numerator), i128::from(denominator))
}

/// `part` as a whole-number percentage of `whole`, rounded half-up.
pub fn rounded_percent(part: i64, whole: i64) -> i64 {
    round_half_up(i128::from(part) * 100, i128::from(whole))
}

fn round_half_up(numerator: i128, denominator: i128) -> i64 {
    if denominator == 0 {
        return 0;
    }
    let (n, d) = if denominator < 0 {
        (-numerator, -denominator)
    } else {
        (numerator, denominator)
    };
    let rounded = (2 * n + d).div_euclid(2 * d);
    i64::try_from(rounded).unwrap_or(if rounded < 0 { i64::MIN } else { i64::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(5, 2, 3)]
    #[case(7, 3, 2)]
    #[case(8, 3, 3)]
    #[case(-5, 2, -2)]
    #[case(0, 4, 0)]
    #[case(10, 0, 0)]
    fn ratio_rounds_half_up(#[case] numerator: i64, #[case] denominator: i64, #[case] expected: i64) {
        assert_eq!(rounded_ratio(numerator, denominator), expected);
    }

    #[rstest]
    #[case(1, 8, 13)]
    #[case(1, 3, 33)]
    #[case(2, 3, 67)]
    #[case(0, 0, 0)]
    #[case(25, 100, 25)]
    fn percent_rounds_half_up(#[case] part: i64, #[case] whole: i64, #[case] expected: i64) {
        assert_eq!(rounded_percent(part, whole), expected);
    }
}
