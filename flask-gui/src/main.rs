use flask_gui::FlaskApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    FlaskApp::default().run()
}
