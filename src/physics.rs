use crate::car::Car;

/// Moves the car by its speed, then decays the speed by `drag`.
///
/// With `drag` in `[0, 1)` the speed shrinks toward zero without changing
/// sign. There is no floor; tiny speeds just stop mattering.
pub fn integrate(car: &mut Car, drag: f64) {
    car.set_position(car.position() + car.speed());
    car.set_speed(car.speed() * drag);
}
