use ekspresso::*;

fn main() -> Result<(), EkspressoError> {
    println!("A simple example!");

    let on = parse_minterms("1, 2, 59, 228")?;
    let off = parse_minterms("5, 6, 45, 56, 145")?;

    for method in [Method::Systematic, Method::Heuristic] {
        let result = method.run(&on, &off)?;
        println!("{}: {} ({:?})", method, result.value, result.elapsed);
    }

    let found = alternatives(&on, &off)?.into_inner();
    println!("{} minimal expressions:", found.len());
    for expr in &found {
        for notation in Notation::ALL {
            println!("    {}", expr.notated(notation));
        }
    }
    Ok(())
}
