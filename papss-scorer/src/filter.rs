//! Affordability and commute filters.

use log::trace;
use papss_core::{BuyerProfile, Town};

/// Why a town was excluded from the ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RejectionReason {
    /// The purchase price for the requested surface exceeded the budget.
    OverBudget {
        /// Price per area multiplied by the requested surface.
        total_price: f64,
    },
    /// The commute exceeded the buyer's ceiling.
    CommuteTooLong {
        /// The town's commute time.
        commute_minutes: u16,
    },
}

/// A town that failed at least one constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// Name of the excluded town.
    pub town: String,
    /// Every constraint the town failed; never empty.
    pub reasons: Vec<RejectionReason>,
}

/// Check both constraints for one town.
///
/// # Errors
/// Returns a [`Rejection`] listing every failed constraint.
pub fn check(town: &Town, profile: &BuyerProfile) -> Result<(), Rejection> {
    let mut reasons = Vec::new();
    let total_price = town.total_price(profile.surface_area());
    if total_price > profile.budget() {
        reasons.push(RejectionReason::OverBudget { total_price });
    }
    if town.commute_minutes > profile.max_commute_minutes() {
        reasons.push(RejectionReason::CommuteTooLong {
            commute_minutes: town.commute_minutes,
        });
    }
    if reasons.is_empty() {
        Ok(())
    } else {
        Err(Rejection {
            town: town.name.clone(),
            reasons,
        })
    }
}

/// Split towns into survivors, in input order, and rejections.
pub fn partition<'a, I>(towns: I, profile: &BuyerProfile) -> (Vec<&'a Town>, Vec<Rejection>)
where
    I: IntoIterator<Item = &'a Town>,
{
    let mut survivors = Vec::new();
    let mut rejections = Vec::new();
    for town in towns {
        match check(town, profile) {
            Ok(()) => survivors.push(town),
            Err(rejection) => {
                trace!("excluding {}: {:?}", rejection.town, rejection.reasons);
                rejections.push(rejection);
            }
        }
    }
    (survivors, rejections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use papss_core::test_support::town;
    use rstest::{fixture, rstest};

    #[fixture]
    fn profile() -> BuyerProfile {
        BuyerProfile::new(600_000.0, 80.0, 30, 40, 16).expect("valid profile")
    }

    #[rstest]
    fn budget_boundary_is_inclusive(profile: BuyerProfile) {
        assert_eq!(check(&town("Edge", 7500.0, 30), &profile), Ok(()));
    }

    #[rstest]
    fn reports_every_failed_constraint(profile: BuyerProfile) {
        let rejection = check(&town("Far and dear", 8000.0, 31), &profile)
            .expect_err("both constraints fail");
        assert_eq!(
            rejection.reasons,
            vec![
                RejectionReason::OverBudget {
                    total_price: 640_000.0
                },
                RejectionReason::CommuteTooLong {
                    commute_minutes: 31
                },
            ]
        );
    }

    #[rstest]
    fn partition_keeps_input_order(profile: BuyerProfile) {
        let towns = [
            town("C", 5000.0, 10),
            town("Dear", 9000.0, 10),
            town("A", 6000.0, 20),
            town("Far", 5000.0, 50),
        ];
        let (survivors, rejections) = partition(&towns, &profile);
        let names: Vec<_> = survivors.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["C", "A"]);
        let rejected: Vec<_> = rejections.iter().map(|r| r.town.as_str()).collect();
        assert_eq!(rejected, ["Dear", "Far"]);
    }
}
