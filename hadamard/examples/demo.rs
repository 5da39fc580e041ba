use hadamard::{inverse_randomized_transform, randomized_transform, fwht, inverse_fwht};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    // 1) Plain FWHT and its unnormalized inverse
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let y = fwht(&x).expect("length is a power of two");
    let back = inverse_fwht(&y).expect("length is a power of two");
    println!("x          = {:?}", x);
    println!("H x        = {:?}", y);
    println!("H H x / n  = {:?}", back.iter().map(|v| v / 8.0).collect::<Vec<_>>());

    // 2) Randomized transform with a seeded generator
    let mut rng = StdRng::seed_from_u64(2024);
    let (ry, mask) = randomized_transform(&x, &mut rng).expect("length is a power of two");
    println!("mask       = {:?}", mask.to_signs());
    println!("H (x * s)  = {:?}", ry);

    let recovered = inverse_randomized_transform(&ry, &mask).expect("mask matches");
    println!("recovered  = {:?}", recovered);

    // 3) Non-power-of-two lengths are rejected
    match fwht(&[1.0, 2.0, 3.0]) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("length 3: {}", e),
    }
}
