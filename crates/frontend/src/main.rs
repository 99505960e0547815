use tick_frontend::App;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(tracing_web::MakeWebConsoleWriter::new())
        .with_ansi(false)
        .without_time()
        .init();

    yew::Renderer::<App>::new().render();
}
