//! Collision demo application
//!
//! Runs a handful of collision queries between spheres, boxes and planes
//! and prints their results. An optional first argument names a TOML or RON
//! file with the query options.

use collision_engine::foundation::{geometry, logging};
use collision_engine::prelude::*;
use rand::Rng;

fn load_options() -> Result<CollisionOptions, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading options from {}", path);
            Ok(CollisionOptions::load_from_file(&path)?)
        }
        None => Ok(CollisionOptions::default().with_verbose(true)),
    }
}

fn report(label: &str, result: Result<CollisionResult, CollisionError>) {
    match result {
        Ok(result) => println!("{label}: {result}"),
        Err(err) => println!("{label}: {err}"),
    }
}

fn sphere_demo(opts: &CollisionOptions) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Sphere demo");
    let a = Sphere::new([0.0, 0.0, 0.0], 1.0)?;
    let mut b = Sphere::new("1, 0, 0", "0.5")?;

    report("spheres overlapping", a.has_collision(&b, opts));

    b.set_translation(&Vec3::new(0.5, 0.0, 0.0));
    report("spheres touching", a.has_collision(&b, opts));

    b.set_rotation(&Mat3::rotation_z(90.0));
    report("spheres after rotation", a.has_collision(&b, opts));

    let floor = Plane::xy(-1.0);
    report("sphere on floor", a.has_collision(&floor, opts));
    Ok(())
}

fn box_demo(opts: &CollisionOptions) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Box demo");
    let a = Cuboid::new([-1.0, -1.0, -1.0], [1.0, 1.0, 1.0])?;
    let mut b = Cuboid::new([-1.0, -1.0, -1.0], [1.0, 1.0, 1.0])?;
    b.set_rotation(&Mat3::rotation_about(&Vec3::new(1.0, 1.0, 0.0), 30.0)?);
    b.set_translation(&Vec3::new(2.2, 0.0, 0.0));

    report("boxes", a.has_collision(&b, opts));

    let diagonal = Plane::new([1.0, 1.0, 1.0], 0.0)?;
    let result = a.has_collision(&diagonal, opts)?;
    println!("box cut by diagonal plane: {result}");
    println!(
        "{}",
        ron::ser::to_string_pretty(&result, ron::ser::PrettyConfig::default())?
    );

    let sphere = Sphere::new([0.0, 0.0, 0.0], 1.0)?;
    report("sphere and box", sphere.has_collision(&a, opts));
    Ok(())
}

fn plane_demo(opts: &CollisionOptions) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Plane demo");
    let a = Plane::xy(0.0);
    let mut b = Plane::xy(0.0);

    report("identical planes", a.has_collision(&b, opts));

    b.set_translation(&Vec3::new(0.0, 0.0, 1.0));
    report("parallel planes", a.has_collision(&b, opts));

    b.set_rotation(&Mat3::rotation_y(45.0));
    report("crossing planes", a.has_collision(&b, opts));

    let normal = b.norm_vector();
    let (v, w) = geometry::plane_vectors(&normal)?;
    println!("plane spanned by {:?} and {:?}", v.as_slice(), w.as_slice());

    let mut rng = rand::thread_rng();
    for _ in 0..3 {
        let scale = rng.gen_range(1.0..10.0);
        let point = geometry::point_of_plane_random(&normal, b.distance(), scale, &mut rng)?;
        println!(
            "random point {:?} at distance {:.3e}",
            point.as_slice(),
            b.signed_distance(&point)
        );
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level(log::LevelFilter::Debug);

    log::info!("Starting collision demo");
    let opts = load_options()?;
    log::debug!("Options: {:?}", opts);

    sphere_demo(&opts)?;
    box_demo(&opts)?;
    plane_demo(&opts)?;

    log::info!("Collision demo finished");
    Ok(())
}
