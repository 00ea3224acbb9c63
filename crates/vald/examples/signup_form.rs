//! Validating a url-encoded signup form with vald.
//!
//! ```text
//! cargo run -p vald --example signup_form -- 'email=a%40b.io&plan=team&company=ACME&seats=5'
//! ```

use vald::prelude::*;

fn signup() -> Pack {
    pack![
        req("email", pattern(r"^[^@\s]+@[^@\s]+$")),
        req("plan", one_of(["free", "team", "enterprise"])),
        opt_def("newsletter", boolean(), "false"),
        cond(
            "company",
            pattern("^.{2,64}$"),
            Some(req("seats", pattern("^[1-9][0-9]*$")).boxed()),
            None,
        ),
    ]
}

fn main() {
    let validate = signup();

    let bodies: Vec<String> = match std::env::args().nth(1) {
        Some(body) => vec![body],
        None => vec![
            "email=a%40b.io&plan=team&newsletter=T&company=ACME&seats=5".into(),
            "email=a%40b.io&plan=free".into(),
            "email=a%40b.io&plan=gold".into(),
            "email=a%40b.io&plan=team&company=ACME".into(),
        ],
    };

    for body in &bodies {
        println!("{body}");
        match validate.collect(&FormSource::parse(body)) {
            Ok(pairs) => {
                for (field, value) in pairs {
                    println!("  ✓ {field} = {value}");
                }
            }
            Err(e) => println!("  ✗ {e}"),
        }
    }
}
