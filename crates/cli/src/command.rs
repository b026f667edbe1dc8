use argh::FromArgs;
use mmsorter_core::{Point, PointError};

#[derive(FromArgs, Debug, PartialEq)]
#[argh(subcommand)]
pub(crate) enum Command {
    Add(Add),
    Sub(Sub),
    Eq(Equal),
    Ne(NotEqual),
    Sign(Sign),
    Step(Step),
}

/// add two points
#[derive(FromArgs, Debug, PartialEq)]
#[argh(subcommand, name = "add")]
pub(crate) struct Add {
    /// left point as x,y
    #[argh(positional)]
    a: Point,

    /// right point as x,y
    #[argh(positional)]
    b: Point,
}

/// subtract the second point from the first
#[derive(FromArgs, Debug, PartialEq)]
#[argh(subcommand, name = "sub")]
pub(crate) struct Sub {
    /// left point as x,y
    #[argh(positional)]
    a: Point,

    /// right point as x,y
    #[argh(positional)]
    b: Point,
}

/// check whether two points are equal
#[derive(FromArgs, Debug, PartialEq)]
#[argh(subcommand, name = "eq")]
pub(crate) struct Equal {
    /// left point as x,y
    #[argh(positional)]
    a: Point,

    /// right point as x,y
    #[argh(positional)]
    b: Point,
}

/// check whether two points differ
#[derive(FromArgs, Debug, PartialEq)]
#[argh(subcommand, name = "ne")]
pub(crate) struct NotEqual {
    /// left point as x,y
    #[argh(positional)]
    a: Point,

    /// right point as x,y
    #[argh(positional)]
    b: Point,
}

/// sign of each coordinate of a point
#[derive(FromArgs, Debug, PartialEq)]
#[argh(subcommand, name = "sign")]
pub(crate) struct Sign {
    /// point as x,y
    #[argh(positional)]
    p: Point,
}

/// unit step to take from one point towards another
#[derive(FromArgs, Debug, PartialEq)]
#[argh(subcommand, name = "step")]
pub(crate) struct Step {
    /// current point as x,y
    #[argh(positional)]
    from: Point,

    /// target point as x,y
    #[argh(positional)]
    to: Point,
}

impl Command {
    /// Evaluate the command, returns the line to print
    pub(crate) fn run(&self) -> Result<String, PointError> {
        log::debug!("Running {self:?}");

        let out = match self {
            Command::Add(Add { a, b }) => a.checked_add(*b)?.to_string(),
            Command::Sub(Sub { a, b }) => a.checked_sub(*b)?.to_string(),
            Command::Eq(Equal { a, b }) => (a == b).to_string(),
            Command::Ne(NotEqual { a, b }) => (a != b).to_string(),
            Command::Sign(Sign { p }) => p.sign().to_string(),
            Command::Step(Step { from, to }) => to.checked_sub(*from)?.sign().to_string(),
        };

        Ok(out)
    }
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use super::*;
    use crate::Cli;

    fn parse(args: &[&str]) -> Cli {
        match Cli::from_args(&["mmpoint"], args) {
            Ok(cli) => cli,
            Err(e) => panic!("failed to parse {args:?}: {}", e.output),
        }
    }

    fn run(args: &[&str]) -> Result<String, PointError> {
        parse(args).command.run()
    }

    #[test]
    fn add() {
        assert_eq!(Ok("6,2".to_string()), run(&["add", "2,3", "4,-1"]));
    }

    #[test]
    fn sub() {
        assert_eq!(Ok("-2,4".to_string()), run(&["sub", "2,3", "4,-1"]));
    }

    #[test]
    fn negative_after_separator() {
        assert_eq!(Ok("2,6".to_string()), run(&["add", "--", "-1,2", "3,4"]));
    }

    #[test]
    fn compare() {
        assert_eq!(Ok("true".to_string()), run(&["eq", "7,7", "7,7"]));
        assert_eq!(Ok("false".to_string()), run(&["eq", "7,7", "7,-7"]));
        assert_eq!(Ok("true".to_string()), run(&["ne", "7,7", "7,-7"]));
        assert_eq!(Ok("false".to_string()), run(&["ne", "7,7", "7,7"]));
    }

    #[test]
    fn sign() {
        assert_eq!(Ok("0,-1".to_string()), run(&["sign", "0,-5"]));
        assert_eq!(Ok("0,0".to_string()), run(&["sign", "0,0"]));
    }

    #[test]
    fn step() {
        assert_eq!(Ok("1,-1".to_string()), run(&["step", "0,0", "5,-3"]));
        assert_eq!(Ok("0,0".to_string()), run(&["step", "5,-3", "5,-3"]));
    }

    #[test]
    fn overflow() {
        let max = i32::MAX.to_string() + ",0";
        let res = run(&["add", &max, "1,0"]);
        assert!(matches!(res, Err(PointError::Overflow { op: "add", .. })));
    }

    #[test]
    fn flags() {
        let cli = parse(&["--debug", "--log-file", "/tmp/other.log", "sign", "1,1"]);
        assert!(cli.debug);
        assert_eq!(Some(PathBuf::from("/tmp/other.log")), cli.log_file);
        assert_eq!(
            Command::Sign(Sign {
                p: Point::new(1, 1)
            }),
            cli.command
        );
    }

    #[test]
    fn invalid_point() {
        assert!(Cli::from_args(&["mmpoint"], &["sign", "1;1"]).is_err());
        assert!(Cli::from_args(&["mmpoint"], &["add", "1,1"]).is_err());
    }
}
