mod app;

fn main() {
    let args = app::common::translate_query_args(std::env::args_os());
    app::common::create_app_helper().launch_app_with_args(args);
}
