//! Executes parsed commands against an access proxy.

use std::io::{BufRead, Write};

use gatelog_proxy::AccessProxy;
use gatelog_storage::LineStore;
use tracing::warn;

use crate::command::{Command, HELP};

/// What the caller should do after a command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Reply {
    /// Print these lines and keep going.
    Lines(Vec<String>),
    /// End the session.
    Quit,
}

impl Reply {
    fn ok() -> Self {
        Self::Lines(vec!["ok".to_owned()])
    }
}

/// A driver session: one proxy, one caller.
pub(crate) struct Session<'a, S: LineStore + ?Sized> {
    proxy: AccessProxy<'a, S>,
}

impl<'a, S: LineStore + ?Sized> Session<'a, S> {
    /// Start an unauthenticated session over `store`.
    pub(crate) fn new(store: &'a S) -> Self {
        Self {
            proxy: AccessProxy::new(store),
        }
    }

    /// The underlying proxy.
    #[cfg(test)]
    pub(crate) fn proxy(&self) -> &AccessProxy<'a, S> {
        &self.proxy
    }

    /// Run one command.
    pub(crate) fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Login { username, password } => {
                self.proxy.login(&username, &password);
                Reply::ok()
            },
            Command::Logout => {
                self.proxy.logout();
                Reply::ok()
            },
            Command::Append(line) => {
                self.proxy.append(&line);
                Reply::ok()
            },
            Command::List => {
                let lines = self.proxy.list();
                if lines.is_empty() {
                    Reply::Lines(vec!["(empty)".to_owned()])
                } else {
                    Reply::Lines(lines)
                }
            },
            Command::Truncate => {
                self.proxy.truncate();
                Reply::ok()
            },
            Command::Status => Reply::Lines(vec![self.proxy.state().to_string()]),
            Command::Help => Reply::Lines(HELP.lines().map(str::to_owned).collect()),
            Command::Quit => Reply::Quit,
        }
    }

    /// Parse and run one input line, writing the reply to `out`.
    ///
    /// Returns `false` once the session should end. Parse errors are
    /// reported on `out` and do not end the session.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `out` fails.
    pub(crate) fn handle_line(
        &mut self,
        line: &str,
        out: &mut impl Write,
    ) -> std::io::Result<bool> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(e) => {
                warn!(error = %e, "rejected command");
                writeln!(out, "error: {e}")?;
                return Ok(true);
            },
        };

        match self.execute(command) {
            Reply::Lines(lines) => {
                for line in lines {
                    writeln!(out, "{line}")?;
                }
                Ok(true)
            },
            Reply::Quit => Ok(false),
        }
    }

    /// Run every line of `input` until it ends or a `quit` command.
    ///
    /// # Errors
    ///
    /// Returns an error if reading `input` or writing `out` fails.
    pub(crate) fn run_script(
        &mut self,
        input: impl BufRead,
        out: &mut impl Write,
    ) -> std::io::Result<()> {
        for line in input.lines() {
            if !self.handle_line(&line?, out)? {
                break;
            }
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatelog_storage::MemoryLineStore;
    use gatelog_test::RecordingStore;

    fn run(store: &MemoryLineStore, script: &str) -> String {
        let mut session = Session::new(store);
        let mut out = Vec::new();
        session.run_script(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_unauthenticated_script_reaches_nothing() {
        let store = MemoryLineStore::from(vec!["secret".to_owned()]);
        let out = run(&store, "append x\ntruncate\nlist\nstatus\n");

        assert_eq!(out, "ok\nok\n(empty)\nunauthenticated\n");
        assert_eq!(store.list(), vec!["secret"]);
    }

    #[test]
    fn test_authenticated_script() {
        let store = MemoryLineStore::new();
        let out = run(
            &store,
            "login user pass\nappend first\nappend second\nlist\ntruncate\nlist\n",
        );

        assert_eq!(out, "ok\nok\nok\nfirst\nsecond\nok\n(empty)\n");
        assert!(store.is_empty());
    }

    #[test]
    fn test_logout_in_script() {
        let store = MemoryLineStore::new();
        let out = run(
            &store,
            "login alice pw\nstatus\nappend kept\nlogout\nappend dropped\nstatus\n",
        );

        assert_eq!(
            out,
            "ok\nauthenticated as alice\nok\nok\nok\nunauthenticated\n"
        );
        assert_eq!(store.list(), vec!["kept"]);
    }

    #[test]
    fn test_quit_stops_script() {
        let store = MemoryLineStore::new();
        let out = run(&store, "login u p\nquit\nappend never\n");

        assert_eq!(out, "ok\n");
        assert!(store.is_empty());
    }

    #[test]
    fn test_errors_do_not_end_script() {
        let store = MemoryLineStore::new();
        let out = run(&store, "bogus\nlogin u p\nlist extra\nappend after\n");

        assert_eq!(
            out,
            concat!(
                "error: unknown command 'bogus' (try 'help')\n",
                "ok\n",
                "error: 'list' takes no arguments, got 'extra'\n",
                "ok\n",
            )
        );
        assert_eq!(store.list(), vec!["after"]);
    }

    #[test]
    fn test_execute_delegates_through_proxy() {
        let store = RecordingStore::new().with_list_response(vec!["a".to_owned(), "b".to_owned()]);
        let mut session = Session::new(&store);

        assert_eq!(
            session.execute(Command::List),
            Reply::Lines(vec!["(empty)".to_owned()])
        );
        assert_eq!(store.call_count(), 0);

        session.execute(Command::Login {
            username: "user".to_owned(),
            password: "pass".to_owned(),
        });
        assert!(session.proxy().is_authenticated());
        assert_eq!(
            session.execute(Command::List),
            Reply::Lines(vec!["a".to_owned(), "b".to_owned()])
        );
        assert_eq!(store.list_count(), 1);
    }

    #[test]
    fn test_help_reply() {
        let store = MemoryLineStore::new();
        let mut session = Session::new(&store);
        let Reply::Lines(lines) = session.execute(Command::Help) else {
            panic!("help must not quit");
        };
        assert!(lines.iter().any(|l| l.contains("login <user> <pass>")));
    }
}
