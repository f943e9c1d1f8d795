//! Validating a sign-up form with sift-validator

use sift_validator::prelude::*;

struct SignUp {
    email: String,
    username: String,
    age: u8,
    accepted_terms: bool,
    interests: Vec<String>,
}

sift_validator::record!(SignUp);

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut form = SignUp {
        email: "  Aadi@Example.COM ".into(),
        username: "aadi@23".into(),
        age: 16,
        accepted_terms: true,
        interests: Vec::new(),
    };

    let result = record(&mut form)
        .named("signup")
        .fields(|form| {
            vec![
                string(&mut form.email)
                    .named("email")
                    .trim()
                    .to_lowercase()
                    .email()
                    .boxed(),
                string(&mut form.username)
                    .named("username")
                    .min(3)
                    .max(20)
                    .alpha_numeric()
                    .boxed(),
                number(&mut form.age).named("age").min(18).boxed(),
                boolean(&mut form.accepted_terms)
                    .named("terms")
                    .is(true)
                    .boxed(),
                sequence(&mut form.interests)
                    .named("interests")
                    .min(1)
                    .with_message("pick at least one interest")
                    .boxed(),
            ]
        })
        .validate();

    println!("normalized email: {}", form.email);
    match result {
        Ok(()) => println!("✓ form is valid"),
        Err(errors) => {
            println!("✗ {errors}");
            for error in &errors {
                println!("  {error}");
            }
        }
    }
}
