//! Cross-checks the factor table against uom's SI definitions.

use ec_core::{Category, Tolerances, nearly_equal};

const TOL: Tolerances = Tolerances {
    abs: 1e-12,
    rel: 1e-5,
};

fn assert_factor(category: Category, unit: &str, si_base_per_unit: f64) {
    let factor = category.factor(unit).expect("unit in table");
    assert!(
        nearly_equal(factor, si_base_per_unit, TOL),
        "{unit}: table {factor}, SI {si_base_per_unit}"
    );
}

#[test]
fn length_factors() {
    use uom::si::f64::Length;
    use uom::si::length::{centimeter, foot, inch, kilometer, meter, mile, millimeter, yard};

    let m = |l: Length| l.get::<meter>();
    assert_factor(Category::Length, "mm", m(Length::new::<millimeter>(1.0)));
    assert_factor(Category::Length, "cm", m(Length::new::<centimeter>(1.0)));
    assert_factor(Category::Length, "km", m(Length::new::<kilometer>(1.0)));
    assert_factor(Category::Length, "in", m(Length::new::<inch>(1.0)));
    assert_factor(Category::Length, "ft", m(Length::new::<foot>(1.0)));
    assert_factor(Category::Length, "yd", m(Length::new::<yard>(1.0)));
    assert_factor(Category::Length, "mi", m(Length::new::<mile>(1.0)));
}

#[test]
fn weight_factors() {
    use uom::si::f64::Mass;
    use uom::si::mass::{gram, kilogram, ounce, pound};

    let kg = |w: Mass| w.get::<kilogram>();
    assert_factor(Category::Weight, "g", kg(Mass::new::<gram>(1.0)));
    assert_factor(Category::Weight, "oz", kg(Mass::new::<ounce>(1.0)));
    assert_factor(Category::Weight, "lb", kg(Mass::new::<pound>(1.0)));
}

#[test]
fn speed_factors() {
    use uom::si::f64::Velocity;
    use uom::si::velocity::{foot_per_second, kilometer_per_hour, knot, meter_per_second, mile_per_hour};

    let mps = |v: Velocity| v.get::<meter_per_second>();
    assert_factor(Category::Speed, "km/h", mps(Velocity::new::<kilometer_per_hour>(1.0)));
    assert_factor(Category::Speed, "mph", mps(Velocity::new::<mile_per_hour>(1.0)));
    assert_factor(Category::Speed, "ft/s", mps(Velocity::new::<foot_per_second>(1.0)));
    assert_factor(Category::Speed, "knots", mps(Velocity::new::<knot>(1.0)));
}

#[test]
fn area_factors() {
    use uom::si::area::{acre, hectare, square_foot, square_inch, square_meter, square_mile, square_yard};
    use uom::si::f64::Area;

    let m2 = |a: Area| a.get::<square_meter>();
    assert_factor(Category::Area, "ha", m2(Area::new::<hectare>(1.0)));
    assert_factor(Category::Area, "in²", m2(Area::new::<square_inch>(1.0)));
    assert_factor(Category::Area, "ft²", m2(Area::new::<square_foot>(1.0)));
    assert_factor(Category::Area, "yd²", m2(Area::new::<square_yard>(1.0)));
    assert_factor(Category::Area, "acres", m2(Area::new::<acre>(1.0)));
    assert_factor(Category::Area, "mi²", m2(Area::new::<square_mile>(1.0)));
}

#[test]
fn volume_factors() {
    use uom::si::f64::Volume;
    use uom::si::volume::{cubic_inch, cubic_meter, gallon, liter, milliliter};

    let l = |v: Volume| v.get::<liter>();
    assert_factor(Category::Volume, "ml", l(Volume::new::<milliliter>(1.0)));
    assert_factor(Category::Volume, "m³", l(Volume::new::<cubic_meter>(1.0)));
    assert_factor(Category::Volume, "gal", l(Volume::new::<gallon>(1.0)));
    assert_factor(Category::Volume, "in³", l(Volume::new::<cubic_inch>(1.0)));
}

#[test]
fn temperature_matches_thermodynamic_scales() {
    use uom::si::f64::ThermodynamicTemperature;
    use uom::si::thermodynamic_temperature::{degree_celsius, degree_fahrenheit, kelvin};

    for c in [-40.0, 0.0, 36.6, 100.0] {
        let t = ThermodynamicTemperature::new::<degree_celsius>(c);
        let f = ec_core::convert(c, "temperature", "°C", "°F").unwrap();
        let k = ec_core::convert(c, "temperature", "°C", "K").unwrap();
        assert!((f - t.get::<degree_fahrenheit>()).abs() < 1e-9);
        assert!((k - t.get::<kelvin>()).abs() < 1e-9);
    }
}
