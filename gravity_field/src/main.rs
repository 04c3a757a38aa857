use gravity_field::predefined::PredefinedGravityField;
use gravity_field::GravityFieldModel;
use nalgebra::Vector3;

fn main() {
    let field =
        GravityFieldModel::from_predefined(PredefinedGravityField::Wgs84).with_expansion(4, 0);
    let r_ecef = Vector3::new(6.8e6, 0.0, 2.0e5);
    let g = field.gradient_of_potential(&r_ecef).unwrap();
    let g_zonal = field.zonal_gradient_of_potential(&r_ecef).unwrap();
    dbg!(g);
    dbg!(g_zonal);
    println!("{field}");
}
