use clap::Parser;
use log::{error, info};
use rbmc::{
    aig::Aig,
    bmc::{Bmc, BmcResult},
    Options,
};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    panic,
    process::exit,
};

fn fatal(msg: impl std::fmt::Display) -> ! {
    error!("{msg}");
    exit(1)
}

fn write_witness(path: &str, witness: &rbmc::witness::Witness) -> io::Result<()> {
    let file = File::create(path)?;
    witness.write(BufWriter::new(file))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
    // library panics report like any other fatal error, also under panic = "abort"
    panic::set_hook(Box::new(|info| fatal(info)));
    let options = match Options::try_parse() {
        Ok(options) => options,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            exit(1)
        }
    };
    ctrlc::set_handler(|| {
        println!("c interrupted");
        let _ = io::stdout().flush();
        exit(130);
    })
    .unwrap_or_else(|e| fatal(e));
    let targets = options.targets().unwrap_or_else(|e| fatal(e));
    let solver = options.solver().unwrap_or_else(|e| fatal(e));
    let aig = Aig::from_file(&targets.model).unwrap_or_else(|e| fatal(e));
    aig.diagnose(&targets.model);
    info!(
        "{}: {} inputs, {} latches, {} and gates",
        targets.model,
        aig.inputs.len(),
        aig.latchs.len(),
        aig.ands.len()
    );
    let mut bmc = Bmc::new(aig, options.bmc_config(targets.max_bound), solver.create());
    let res = bmc.check();
    if options.verbose > 1 {
        info!("{:#?}", bmc.statistic());
    }
    match res {
        BmcResult::Violated(_) => {
            println!("c SAT");
            let Some(witness) = bmc.witness() else {
                fatal("violation without witness")
            };
            if options.certify {
                if !witness.replay(bmc.aig()) {
                    fatal("witness does not replay on the model");
                }
                info!("witness certified");
            }
            if let Some(path) = targets.witness.as_deref() {
                if let Err(e) = write_witness(path, &witness) {
                    fatal(format!("{path}: {e}"));
                }
                println!("c Witness written to {path}");
            }
        }
        BmcResult::BoundExhausted(bound) => {
            println!("c reached max bound {bound}");
            exit(124);
        }
    }
}
