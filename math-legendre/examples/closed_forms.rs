//! Print the closed form of every definition up to degree 2.

use math_harmonics_legendre::Definition;

fn main() {
    for definition in Definition::ALL {
        println!(
            "{} (Condon-Shortley: {})",
            definition,
            definition.condon_shortley()
        );
        let table = definition.table(2).expect("table build failed");
        for (n, m, expr) in table.iter() {
            println!("  P_{}^{} = {}", n, m, expr);
        }
        println!();
    }
}
