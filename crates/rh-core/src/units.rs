// rh-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, ThermalConductivity as UomThermalConductivity,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Conductivity = UomThermalConductivity;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn kelvin(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn w_per_m_k(v: f64) -> Conductivity {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    Conductivity::new::<watt_per_meter_kelvin>(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_store_si_values() {
        assert_eq!(m(2.0).value, 2.0);
        assert_eq!(kelvin(300.0).value, 300.0);
        assert_eq!(w_per_m_k(0.5).value, 0.5);
    }
}
