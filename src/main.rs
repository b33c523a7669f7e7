use courseplan::core::cli::CliPaths;
use courseplan::core::context::AppContext;
use courseplan::logging::LogTarget;
use courseplan::prompter::flows::main_flow::MainFlow;
use courseplan::prompter::prompter::Prompter;

fn main() {
    let paths = match CliPaths::from_env() {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let mut ctx = match AppContext::new_with_paths(
        paths.config_path,
        paths.exports_dir,
        paths.logs_dir,
        paths.credentials_path,
    ) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let prompter = Prompter::new();
    let flow = MainFlow::new(&mut ctx);

    if let Err(err) = prompter.run(flow, false) {
        ctx.logger
            .error(format!("{err}"), LogTarget::ConsoleAndFile);
    }
}
