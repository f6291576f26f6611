use math_utilities::{mean, median, mode, range, MathError};

fn main() -> Result<(), MathError> {
  println!("--- Sample Statistics Example ---");

  let mut sample = vec![4.0, 1.0, 7.0, 2.0, 7.0, 4.0];
  println!("Sample: {:?}", sample);
  println!("Mean: {:.4}", mean(&sample));
  println!("Mode(s): {:?}", mode(&sample));

  // median and range sort the sample in place
  println!("Median: {:.4}", median(&mut sample));
  println!("Range: {:.4}", range(&mut sample)?);
  println!("Sample after sorting: {:?}", sample);

  // An empty sample has no range
  let mut empty: Vec<f64> = Vec::new();
  match range(&mut empty) {
    Ok(r) => println!("Range of empty sample: {}", r),
    Err(e) => println!("Range of empty sample failed: {}", e),
  }

  Ok(())
}
