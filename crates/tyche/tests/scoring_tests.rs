mod common;

use common::chart_from;
use tyche::scoring::{ConditionStatus, Polarity};
use tyche::{analyze_positive_negative, score_condition, Body, ChartError};

fn score(chart: &tyche::ChartResult, body: Body) -> tyche::ScoredPlanet {
    score_condition(chart.position(body).unwrap(), chart)
}

#[test]
fn test_plain_body_scores_forty_five() {
    // Night chart without the Moon, so there is no sect light to relate to
    let chart = chart_from(
        0.0,
        false,
        &[
            (Body::Sun, 100.0),
            (Body::Mercury, 130.0),
            (Body::Venus, 200.0),
            (Body::Mars, 250.0),
            (Body::Jupiter, 290.0),
            (Body::Saturn, 10.0),
        ],
        &[],
    );
    let mercury = score(&chart, Body::Mercury);
    assert_eq!(mercury.total_score, 45);
    assert_eq!(mercury.base_score, 50);
    assert_eq!(mercury.factors.len(), 1);
    assert_eq!(mercury.factors[0].description, "Peregrine");
    assert_eq!(mercury.factors[0].points, -5);
    assert_eq!(mercury.factors[0].polarity, Polarity::Negative);
    assert!(!mercury.is_averted_to_light);
}

#[test]
fn test_sect_light_sees_itself() {
    // Day chart: the Sun in Capricorn, 10th from Aries rising
    let chart = chart_from(0.0, true, &[(Body::Sun, 270.0), (Body::Moon, 45.0)], &[]);
    let sun = score(&chart, Body::Sun);
    let described: Vec<(&str, i32)> = sun.factors.iter().map(|f| (f.description.as_str(), f.points)).collect();
    assert_eq!(
        described,
        vec![("Sees the sect light (Sun)", 10), ("Peregrine", -5), ("Angular house", 10)]
    );
    assert_eq!(sun.total_score, 65);
    assert!(!sun.is_averted_to_light);

    // Night chart: the Moon in Leo, received by the Sun in Cancer
    let chart = chart_from(0.0, false, &[(Body::Sun, 100.0), (Body::Moon, 130.0)], &[]);
    let moon = score(&chart, Body::Moon);
    assert!(moon.has_factor("Sees the sect light (Moon)"));
    assert!(moon.has_factor("Mutual reception with Sun"));
    assert_eq!(moon.total_score, 65);
}

#[test]
fn test_total_is_base_plus_factors() {
    let chart = chart_from(
        0.0,
        true,
        &[
            (Body::Sun, 300.0),
            (Body::Mercury, 300.1),
            (Body::Venus, 305.0),
            (Body::Mars, 160.0),
            (Body::Jupiter, 280.0),
            (Body::Saturn, 110.0),
        ],
        &[Body::Mercury],
    );
    for pos in &chart.positions {
        let scored = score_condition(pos, &chart);
        let sum: i32 = scored.factors.iter().map(|f| f.points).sum();
        assert_eq!(scored.total_score, 50 + sum, "{}", pos.body);
    }
}

#[test]
fn test_solar_phase_tiers() {
    let chart = chart_from(
        0.0,
        true,
        &[
            (Body::Sun, 300.0),
            (Body::Mercury, 300.1),
            (Body::Venus, 305.0),
            (Body::Mars, 312.0),
            (Body::Jupiter, 200.0),
            (Body::Saturn, 100.0),
        ],
        &[],
    );
    assert!(score(&chart, Body::Mercury).has_factor("Cazimi"));
    assert!(score(&chart, Body::Venus).has_factor("Combust"));
    assert!(score(&chart, Body::Mars).has_factor("Under the beams"));
    let sun = score(&chart, Body::Sun);
    assert!(!sun.has_factor("Cazimi") && !sun.has_factor("Combust"));
}

#[test]
fn test_retrograde_penalty_only_for_planets() {
    let chart = chart_from(
        0.0,
        true,
        &[(Body::Sun, 300.0), (Body::Saturn, 100.0), (Body::Neptune, 200.0)],
        &[Body::Saturn, Body::Neptune],
    );
    assert!(score(&chart, Body::Saturn).has_factor("Retrograde"));
    assert!(!score(&chart, Body::Neptune).has_factor("Retrograde"));
}

#[test]
fn test_domicile_and_ninth_house_exception() {
    // Aries rising: Sagittarius is the 9th
    let chart = chart_from(0.0, true, &[(Body::Sun, 250.0), (Body::Jupiter, 255.0)], &[]);
    let jupiter = score(&chart, Body::Jupiter);
    assert!(jupiter.has_factor("Domicile"));
    assert!(jupiter.has_factor("Ninth house (joy of the Sun)"));
    assert!(!jupiter.has_factor("Peregrine"));

    let sun = score(&chart, Body::Sun);
    assert!(sun.has_factor("Planetary joy"));
    assert!(sun.has_factor("Ninth house (joy of the Sun)"));
}

#[test]
fn test_mutual_reception_and_detriment() {
    let chart = chart_from(
        0.0,
        true,
        &[(Body::Sun, 200.0), (Body::Venus, 15.0), (Body::Mars, 45.0)],
        &[],
    );
    let venus = score(&chart, Body::Venus);
    assert!(venus.has_factor("Mutual reception with Mars"));
    assert!(venus.has_factor("Detriment"));
    assert!(!venus.has_factor("Peregrine"));
    let mars = score(&chart, Body::Mars);
    assert!(mars.has_factor("Mutual reception with Venus"));
}

#[test]
fn test_overcoming_square_from_saturn() {
    let chart = chart_from(
        0.0,
        true,
        &[(Body::Sun, 200.0), (Body::Jupiter, 10.0), (Body::Saturn, 280.0)],
        &[],
    );
    let jupiter = score(&chart, Body::Jupiter);
    let factor = jupiter
        .factors
        .iter()
        .find(|f| f.description == "Overcome by Saturn (superior square)")
        .unwrap();
    assert_eq!(factor.points, -15);
    // Seen from Saturn, Jupiter is in the 4th sign: no overcoming
    let saturn = score(&chart, Body::Saturn);
    assert!(!saturn.factors.iter().any(|f| f.description.contains("superior square")));
}

#[test]
fn test_maltreatment_precedence_and_orb() {
    let chart = chart_from(
        0.0,
        true,
        &[(Body::Sun, 200.0), (Body::Moon, 100.0), (Body::Mars, 281.0), (Body::Saturn, 102.5)],
        &[],
    );
    let moon = score(&chart, Body::Moon);
    assert!(moon.has_factor("Opposed by Mars"));
    assert!(moon.has_factor("Conjunct Saturn"));

    let wide = chart_from(0.0, true, &[(Body::Sun, 200.0), (Body::Moon, 100.0), (Body::Mars, 284.0)], &[]);
    assert!(!score(&wide, Body::Moon).has_factor("Opposed by Mars"));
}

#[test]
fn test_besiegement() {
    let chart = chart_from(
        0.0,
        true,
        &[(Body::Sun, 300.0), (Body::Mars, 100.0), (Body::Venus, 135.0), (Body::Saturn, 170.0)],
        &[],
    );
    assert!(score(&chart, Body::Venus).has_factor("Besieged by Mars and Saturn"));
    assert!(!score(&chart, Body::Mars).has_factor("Besieged by Mars and Saturn"));
}

#[test]
fn test_bonification_by_trine() {
    let chart = chart_from(
        0.0,
        true,
        &[(Body::Sun, 200.0), (Body::Mars, 10.0), (Body::Jupiter, 131.0), (Body::Venus, 300.0)],
        &[],
    );
    let mars = score(&chart, Body::Mars);
    let factor = mars.factors.iter().find(|f| f.description == "Trine from Jupiter").unwrap();
    assert_eq!(factor.points, 5);
    assert_eq!(factor.polarity, Polarity::Positive);
}

#[test]
fn test_aversion_from_sect_light() {
    let chart = chart_from(0.0, true, &[(Body::Sun, 300.0), (Body::Jupiter, 280.0)], &[]);
    let jupiter = score(&chart, Body::Jupiter);
    assert!(jupiter.is_averted_to_light);
    assert!(jupiter.has_factor("Averted from the sect light (Sun)"));
}

#[test]
fn test_analysis_offers_alternate_benefic() {
    let chart = chart_from(
        0.0,
        true,
        &[
            (Body::Sun, 300.0),
            (Body::Venus, 320.0),
            (Body::Mars, 160.0),
            (Body::Jupiter, 280.0),
            (Body::Saturn, 110.0),
        ],
        &[],
    );
    let report = analyze_positive_negative(&chart).unwrap();
    assert!(report.is_day_chart);
    assert_eq!(report.sect_light, Body::Sun);

    assert_eq!(report.most_positive.body, Body::Jupiter);
    assert_eq!(report.most_positive.total_score, 30);
    assert_eq!(report.most_positive.status, Some(ConditionStatus::Disconnected));
    assert_eq!(report.other_benefic.total_score, 55);
    assert_eq!(report.alternate_positive, Some(Body::Venus));

    assert_eq!(report.most_negative.body, Body::Mars);
    assert_eq!(report.most_negative.status, Some(ConditionStatus::Disconnected));
    // Saturn is averted as well, so it is not offered instead
    assert!(report.other_malefic.is_averted_to_light);
    assert_eq!(report.alternate_negative, None);
}

#[test]
fn test_analysis_requires_benefics_and_malefics() {
    let chart = chart_from(0.0, true, &[(Body::Sun, 300.0), (Body::Jupiter, 280.0)], &[]);
    assert!(matches!(analyze_positive_negative(&chart), Err(ChartError::Domain(_))));
}
