//! Basic example of hxui usage
//!
//! Registers an interactive dialog on a router and replays the requests a
//! browser would send while the user opens and closes it.
//!
//! Run with `RUST_LOG=debug cargo run -p hxui --example basic` to see the
//! router and state logs.

use hxui::prelude::*;
use tracing_subscriber::EnvFilter;

fn view(binding: &InteractiveBinding, state: &dialog::DialogState) -> Node {
    dialog::interactive(
        dialog::DialogProps {
            open: state.open,
            title: "Edit profile".into(),
            description: "Make changes to your profile here.".into(),
            ..Default::default()
        },
        binding,
        [
            form::label(form::LabelProps { for_: Some("name".into()), ..Default::default() }, [text("Name")]),
            form::input(
                form::InputProps {
                    id: Some("name".into()),
                    name: Some("name".into()),
                    value: Some("Pedro Duarte".into()),
                    ..Default::default()
                },
                [],
            ),
            dialog::footer(
                Props::default(),
                [dialog::close(ButtonProps::default(), binding, [text("Save changes")])],
            ),
        ],
    )
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("hxui v{}", hxui::VERSION);

    let binding = InteractiveBinding::with_paths("dialog-example", "/dialog");
    let store: MemoryStore<dialog::DialogState> = MemoryStore::new();

    let mut router = Router::new();
    let wired = binding.clone();
    dialog::register(&mut router, &binding, store.clone(), move |state| view(&wired, state));
    println!("Registered {} handlers", router.len());

    // The page itself: a trigger outside the swapped root plus the closed dialog
    let page = group([
        dialog::trigger(
            ButtonProps { variant: ButtonVariant::Outline, ..Default::default() },
            &binding,
            [text("Edit Profile")],
        ),
        view(&binding, &store.get(hxui::htmx::DEFAULT_SESSION)),
    ]);
    println!("\n== initial page ==\n{}", render_to_string(&page)?);

    for target in ["/dialog/open", "/dialog/close", "/dialog/toggle"] {
        let req = if target.ends_with("toggle") {
            Request::post(target, "open=true")
        } else {
            Request::get(target)
        };
        println!("\n== {} {} ==\n{}", req.method, target, router.render(&req)?);
    }

    match router.render(&Request::get("/dialog/missing")) {
        Ok(_) => println!("\nunexpected fragment"),
        Err(e) => println!("\n== unknown route ==\n{e}"),
    }

    Ok(())
}
