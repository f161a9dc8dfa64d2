#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use dims_sorter::model::Dims;

fn main() {
    dims_sorter::logging::init_tracing();

    let result = if std::env::args_os().count() <= 1 {
        dims_sorter::ui::run(Dims::new(dims_sorter::ui::DEFAULT_NDIM)).map_err(Into::into)
    } else {
        dims_sorter::run_cli()
    };

    if let Err(error) = result {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
