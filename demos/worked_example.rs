//! Builds the nested sibling/descendant selector from the crate docs and
//! prints it with its specificity. Rejected parts are logged to
//! `worked_example.log`.

use selkit_rs::{FACTORY, SelectorError, combine, init_logger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger("worked_example.log")?;

    let sel = combine(
        &FACTORY
            .element("div")?
            .id("main")?
            .class("container")?
            .class("draggable")?,
        "+",
        &combine(
            &FACTORY.element("table")?.id("data")?,
            "~",
            &combine(
                &FACTORY.element("tr")?.pseudo_class("nth-of-type(even)")?,
                " ",
                &FACTORY.element("td")?.pseudo_class("nth-of-type(even)")?,
            ),
        ),
    );
    println!("{sel}  {}", sel.specificity());

    match FACTORY.element("div")?.id("main")?.element("span") {
        Err(err @ SelectorError::DuplicateSingletonPart { .. }) => println!("rejected: {err}"),
        other => println!("unexpected: {other:?}"),
    }
    Ok(())
}
