use colored::Colorize;

const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// Prints the status of a training run every `round` epochs.
/// `round == usize::MAX` disables the output.
pub(crate) struct TrainingLogger {
    round: usize,
}


impl TrainingLogger {
    /// `round == 0` is treated as `usize::MAX`.
    pub(crate) fn new(round: usize) -> Self {
        let round = if round == 0 { usize::MAX } else { round };
        Self { round }
    }


    #[inline(always)]
    fn is_silent(&self) -> bool {
        self.round == usize::MAX
    }


    /// print current settings.
    pub(crate) fn print_stats(&self, name: &str, info: &[(&str, String)]) {
        if self.is_silent() { return; }

        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Learner".bold(),
            name.bold().green(),
        );
        let line = info.iter()
            .map(|(key, val)| {
                format!(
                    "    + {:<STAT_WIDTH$}\t{:>width$}",
                    key,
                    val.bold().yellow(),
                    width = STAT_WIDTH - 8
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        println!("{line}");
        println!("{:=^FULL_WIDTH$}\n", "".bold());

        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "EPOCH".bold().red(),
            "ERRORS".bold().blue(),
            "ACC.".bold().green(),
            "TIME".bold().cyan(),
        );
    }


    /// Print the status after `epoch`.
    /// The last epoch is always printed.
    pub(crate) fn print_epoch(
        &self,
        epoch: usize,
        n_epochs: usize,
        errors: usize,
        accuracy: f64,
        time_acc: u128,
    )
    {
        if self.is_silent() { return; }

        if epoch == n_epochs {
            println!(
                "{} {}\t\t{}\t{}\t{}\n",
                "[FIN]".bold().bright_green(),
                format!("{:>WIDTH$}", epoch).red(),
                format!("{:>WIDTH$}", errors).bold().blue(),
                format!("{:>WIDTH$.PREC_WIDTH$}", accuracy).bold().green(),
                time_format(time_acc).bold().cyan(),
            );
        } else if epoch % self.round == 0 {
            println!(
                "{} {}\t\t{}\t{}\t{}",
                "[LOG]".bold().magenta(),
                format!("{:>WIDTH$}", epoch).red(),
                format!("{:>WIDTH$}", errors).blue(),
                format!("{:>WIDTH$.PREC_WIDTH$}", accuracy).green(),
                time_format(time_acc).bold().cyan(),
            );
        }
    }
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}
