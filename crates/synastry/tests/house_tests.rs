use synastry::western::{normalize, HouseCusps};

/// Strictly increasing arc widths starting at `start`, all multiples of
/// 0.25° so boundaries land exactly on the scan grid.
fn cusps_from(start: f64, widths: [f64; 12]) -> HouseCusps {
    assert_eq!(widths.iter().sum::<f64>(), 360.0);
    let mut raw = [0.0; 12];
    let mut lon = start;
    for (i, width) in widths.iter().enumerate() {
        raw[i] = lon;
        lon += width;
    }
    HouseCusps::new(raw)
}

const EQUAL: [f64; 12] = [30.0; 12];
const PLACIDUS_LIKE: [f64; 12] = [
    27.5, 31.25, 33.75, 34.0, 30.5, 23.0, 27.5, 31.25, 33.75, 34.0, 30.5, 23.0,
];

fn assert_partition(cusps: &HouseCusps) {
    let c = cusps.as_slice();
    let mut lon = 0.0;
    while lon < 360.0 {
        let house = cusps
            .house_of(lon)
            .unwrap_or_else(|| panic!("{} not placed by {:?}", lon, c));
        assert!((1..=12).contains(&house));
        let start = c[house as usize - 1];
        let end = c[house as usize % 12];
        let offset = normalize(lon - start);
        let width = normalize(end - start);
        assert!(offset < width, "{} placed in house {} ({}..{})", lon, house, start, end);

        let containing = (0..12)
            .filter(|&i| normalize(lon - c[i]) < normalize(c[(i + 1) % 12] - c[i]))
            .count();
        assert_eq!(containing, 1, "{} lies in {} arcs of {:?}", lon, containing, c);
        lon += 0.25;
    }
}

#[test]
fn test_full_circle_partition_for_rotated_cusp_sets() {
    for widths in [EQUAL, PLACIDUS_LIKE] {
        let mut start = 0.0;
        while start < 360.0 {
            assert_partition(&cusps_from(start, widths));
            start += 7.25;
        }
    }
}

#[test]
fn test_first_house_wrapping_through_aries() {
    // House 1 runs 350° -> 20°
    let cusps = cusps_from(350.0, [30.0, 30.0, 30.0, 30.0, 30.0, 30.0, 30.0, 30.0, 30.0, 30.0, 30.0, 30.0]);
    assert_eq!(cusps.house_of(350.0), Some(1));
    assert_eq!(cusps.house_of(359.999), Some(1));
    assert_eq!(cusps.house_of(0.0), Some(1));
    assert_eq!(cusps.house_of(19.999), Some(1));
    assert_eq!(cusps.house_of(20.0), Some(2));
    assert_eq!(cusps.house_of(349.999), Some(12));
}

#[test]
fn test_cusp_belongs_to_the_house_it_opens() {
    let cusps = cusps_from(100.0, EQUAL);
    for house in 1..=12u8 {
        let cusp = cusps.cusp(house).unwrap();
        assert_eq!(cusps.house_of(cusp), Some(house));
    }
}

#[test]
fn test_unnormalized_longitude_is_placed() {
    let cusps = cusps_from(0.0, EQUAL);
    assert_eq!(cusps.house_of(-15.0), Some(12));
    assert_eq!(cusps.house_of(375.0), Some(1));
}

#[test]
fn test_unnormalized_cusps_are_folded() {
    let raw = [
        -10.0, 20.0, 50.0, 80.0, 110.0, 140.0, 170.0, 200.0, 230.0, 260.0, 290.0, 680.0,
    ];
    let cusps = HouseCusps::new(raw);
    assert_eq!(cusps.cusp(1), Some(350.0));
    assert_eq!(cusps.cusp(12), Some(320.0));
    assert_eq!(cusps.house_of(355.0), Some(1));
    assert_eq!(cusps.house_of(330.0), Some(12));
}

#[test]
fn test_degenerate_duplicate_cusps_first_arc_wins() {
    // Houses 3 and 4 share a cusp: house 3 is empty, 4 takes its span.
    let raw = [0.0, 30.0, 60.0, 60.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0];
    let cusps = HouseCusps::new(raw);
    assert_eq!(cusps.house_of(60.0), Some(4));
    assert_eq!(cusps.house_of(90.0), Some(4));
    assert_eq!(cusps.house_of(59.0), Some(2));
}

#[test]
fn test_collapsed_cusp_set_reports_no_house() {
    let cusps = HouseCusps::new([123.0; 12]);
    assert_eq!(cusps.house_of(123.0), None);
    assert_eq!(cusps.house_of(300.0), None);
}

#[test]
fn test_non_finite_longitude_reports_no_house() {
    let cusps = cusps_from(0.0, EQUAL);
    assert_eq!(cusps.house_of(f64::NAN), None);
}
