//! Per-criterion multiplier tables for both formula versions.
//!
//! Each relevant criterion maps its ordinal rating to a multiplier in (0, 1];
//! irrelevant criteria stay neutral at 1.0. A missing rating also falls into
//! the neutral branch, matching the NULL handling of the original formulas.

use crate::domain::{CriterionRatings, RelevanceFlags};

use super::FormulaVersion;

/// Product of all relevant criterion multipliers for one score.
pub(crate) fn multiplier(
    version: FormulaVersion,
    relevance: RelevanceFlags,
    ratings: CriterionRatings,
) -> f64 {
    let mut product = 1.0;

    if relevance.complete {
        product *= complete(ratings.complete);
    }
    if relevance.topical {
        product *= topical(ratings.topical);
    }
    if relevance.accessible {
        product *= accessible(ratings.accessible);
    }

    match version {
        FormulaVersion::V1 => {
            // Under v1 the document flag is not scored on its own; it only
            // selects the stricter hypertext branch.
            if relevance.hypertext {
                product *= hypertext_v1(relevance.document, ratings.hypertext, ratings.document);
            }
        }
        FormulaVersion::V8 => {
            if relevance.hypertext {
                product *= hypertext_v8(ratings.hypertext);
            }
            if relevance.document {
                product *= document_v8(ratings.document);
            }
            if relevance.image {
                product *= image_v8(ratings.image);
            }
        }
    }

    product
}

fn complete(rating: Option<u8>) -> f64 {
    match rating {
        Some(1) => 0.2,
        Some(2) => 0.5,
        _ => 1.0,
    }
}

fn topical(rating: Option<u8>) -> f64 {
    match rating {
        Some(1) => 0.7,
        Some(2) => 0.85,
        _ => 1.0,
    }
}

fn accessible(rating: Option<u8>) -> f64 {
    match rating {
        Some(1) => 0.9,
        Some(2) => 0.95,
        _ => 1.0,
    }
}

fn hypertext_v8(rating: Option<u8>) -> f64 {
    match rating {
        Some(0) => 0.2,
        _ => 1.0,
    }
}

fn document_v8(rating: Option<u8>) -> f64 {
    match rating {
        Some(0) => 0.85,
        _ => 1.0,
    }
}

fn image_v8(rating: Option<u8>) -> f64 {
    match rating {
        Some(0) => 0.95,
        _ => 1.0,
    }
}

fn hypertext_v1(document_relevant: bool, hypertext: Option<u8>, document: Option<u8>) -> f64 {
    if document_relevant {
        match hypertext {
            Some(0) => 0.2,
            Some(1) => match document {
                Some(0) => 0.9,
                _ => 1.0,
            },
            _ => 1.0,
        }
    } else {
        match hypertext {
            Some(0) => 0.2,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relevant(flags: impl Fn(&mut RelevanceFlags)) -> RelevanceFlags {
        let mut relevance = RelevanceFlags::NONE;
        flags(&mut relevance);
        relevance
    }

    #[test]
    fn irrelevant_criteria_stay_neutral() {
        let ratings = CriterionRatings {
            complete: Some(1),
            topical: Some(1),
            accessible: Some(1),
            hypertext: Some(0),
            document: Some(0),
            image: Some(0),
        };
        let product = multiplier(FormulaVersion::V8, RelevanceFlags::NONE, ratings);
        assert_eq!(product, 1.0);
    }

    #[test]
    fn maxed_ratings_multiply_to_one() {
        for version in [FormulaVersion::V1, FormulaVersion::V8] {
            let product = multiplier(version, RelevanceFlags::ALL, CriterionRatings::maxed());
            assert_eq!(product, 1.0);
        }
    }

    #[test]
    fn v8_scores_document_and_image_independently() {
        let relevance = relevant(|r| {
            r.document = true;
            r.image = true;
        });
        let ratings = CriterionRatings {
            document: Some(0),
            image: Some(0),
            ..CriterionRatings::none()
        };
        let product = multiplier(FormulaVersion::V8, relevance, ratings);
        assert!((product - 0.85 * 0.95).abs() < 1e-12);
    }

    #[test]
    fn v1_document_flag_gates_the_hypertext_branch() {
        let relevance = relevant(|r| {
            r.hypertext = true;
            r.document = true;
        });
        let ratings = CriterionRatings {
            hypertext: Some(1),
            document: Some(0),
            ..CriterionRatings::none()
        };
        assert_eq!(multiplier(FormulaVersion::V1, relevance, ratings), 0.9);

        // Without document relevance, hypertext=1 is already perfect.
        let relevance = relevant(|r| r.hypertext = true);
        assert_eq!(multiplier(FormulaVersion::V1, relevance, ratings), 1.0);
    }

    #[test]
    fn v1_and_v8_agree_when_document_and_image_are_irrelevant() {
        let relevance = relevant(|r| {
            r.complete = true;
            r.topical = true;
            r.accessible = true;
            r.hypertext = true;
        });
        for hypertext in [Some(0), Some(1)] {
            for complete in [Some(1), Some(2), Some(3)] {
                let ratings = CriterionRatings {
                    complete,
                    topical: Some(2),
                    accessible: Some(1),
                    hypertext,
                    ..CriterionRatings::none()
                };
                assert_eq!(
                    multiplier(FormulaVersion::V1, relevance, ratings),
                    multiplier(FormulaVersion::V8, relevance, ratings),
                );
            }
        }
    }
}
