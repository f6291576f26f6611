use math_utilities::{
  angle_of_line, cartesian_to_polar, fix_angle, polar_to_cartesian, tan_d, CartesianPoint, PolarPoint, VERSION,
};

fn main() {
  println!("--- Polar Roundtrip Example (math-utilities {}) ---", VERSION);

  // 1. Convert a cartesian point to polar coordinates
  let point = CartesianPoint { x: 3.0, y: 4.0 };
  let polar: PolarPoint = cartesian_to_polar(&point);
  println!("Cartesian ({:.3}, {:.3}) -> Polar r {:.6}, t {:.6} deg", point.x, point.y, polar.r, polar.t);

  // 2. And back again
  let back = polar_to_cartesian(&polar);
  println!("Polar back to cartesian: ({:.12}, {:.12})", back.x, back.y);

  // 3. Heading of the line from the origin to the point, normalized to [0, 360)
  let heading = angle_of_line(0.0, 0.0, -point.x, -point.y);
  println!("Heading of (0,0)->(-3,-4): {:.6} deg, normalized {:.6} deg", heading, fix_angle(heading));

  // 4. The two exact tangents
  println!("tan_d(45) = {}, tan_d(135) = {}", tan_d(45.0), tan_d(135.0));
}
