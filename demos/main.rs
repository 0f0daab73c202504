use affinis::geometry::shape::{Circle, Polygon, RegularPolygon, Shape};
use affinis::geometry::Point;
use affinis::operations::transform::{Rotate, Scale, Translate};

fn main() -> affinis::Result<()> {
    // Reduce a scattered point set to its convex hull.
    let mut polygon = Polygon::new(vec![
        Point::new(1.0, 1.0),
        Point::new(-1.0, -1.0),
        Point::new(1.0, -1.0),
        Point::new(-1.0, 1.0),
        Point::new(0.5, 0.5),
        Point::new(0.7, 0.9),
    ]);
    polygon.close();
    polygon.hull();

    println!("hull:");
    for point in polygon.points() {
        println!("  {point}");
    }

    // Compose a pivot-centered rotation with a translation and print the
    // resulting matrix.
    let spin = Rotate::new(90.0).about(Point::new(3.0, 1.0)).build();
    let composed = Translate::new(2.0, 3.0).build() * spin;
    println!("composed transform:\n{composed}");
    println!("its inverse:\n{}", composed.inverse()?);

    // Stretch a circle; only the defining points move.
    let mut circle = Circle::new(Point::new(0.0, 0.0), 5.0);
    circle.transform(&Scale::new(2.0, 1.0).build()?)?;
    println!("stretched circle points:");
    for point in circle.points() {
        println!("  {point}");
    }

    // Round-trip the point grammar.
    let parsed: Point = "[4.00, -1.00, 1.00]".parse()?;
    println!("parsed point: {parsed}");

    let pentagon = RegularPolygon::new(Point::new(0.0, 0.0), 5, 2.0)?;
    println!("pentagon:");
    for point in pentagon.points() {
        println!("  {point}");
    }

    Ok(())
}
