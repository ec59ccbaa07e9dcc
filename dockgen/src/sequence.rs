//! Instruction accumulation and manifest rendering.
//!
//! The formatting contract is one line per instruction: keyword, single
//! space, argument(s). CMD, ENTRYPOINT, and VOLUME additionally accept an
//! exec-style array form, rendered as `["a", "b"]`.

use crate::step::Step;

/// Argument to a dual-form instruction: shell form (`CMD echo hi`) or exec
/// form (`CMD ["echo", "hi"]`). VOLUME uses the same pair of shapes for its
/// string and array forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandForm {
    /// A single command string, rendered verbatim after the keyword.
    Shell(String),
    /// An argument vector, rendered as a bracketed, double-quoted list.
    Exec(Vec<String>),
}

impl CommandForm {
    /// Format one manifest line for `keyword`.
    pub(crate) fn render(&self, keyword: &str) -> String {
        match self {
            Self::Shell(command) => format!("{keyword} {command}"),
            Self::Exec(args) => format!("{keyword} [\"{}\"]", args.join("\", \"")),
        }
    }
}

impl From<&str> for CommandForm {
    fn from(command: &str) -> Self {
        Self::Shell(command.to_string())
    }
}

impl From<String> for CommandForm {
    fn from(command: String) -> Self {
        Self::Shell(command)
    }
}

impl From<Vec<String>> for CommandForm {
    fn from(args: Vec<String>) -> Self {
        Self::Exec(args)
    }
}

impl From<Vec<&str>> for CommandForm {
    fn from(args: Vec<&str>) -> Self {
        Self::Exec(args.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&[&str]> for CommandForm {
    fn from(args: &[&str]) -> Self {
        Self::Exec(args.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for CommandForm {
    fn from(args: [&str; N]) -> Self {
        Self::Exec(args.iter().map(|s| s.to_string()).collect())
    }
}

/// Ordered container of formatted instruction lines.
///
/// Created empty and only ever appended to, through [`Instructions`]. The
/// line order is the manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionSet {
    lines: Vec<String>,
}

impl InstructionSet {
    /// Create an empty instruction set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line (or one absorbed block).
    pub(crate) fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Accumulated lines, in append order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join the accumulated lines into manifest text.
    ///
    /// Single newline separators, no trailing newline. Pure and idempotent.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl Instructions for InstructionSet {
    fn instructions(&self) -> &InstructionSet {
        self
    }

    fn instructions_mut(&mut self) -> &mut InstructionSet {
        self
    }
}

impl std::fmt::Display for InstructionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Fluent append operations shared by every manifest builder.
///
/// Each method appends exactly one formatted line and returns the receiver
/// so calls chain (`std::process::Command` style). Appends cannot fail and
/// never validate their arguments; the external build tool is the sole judge
/// of manifest semantics, so malformed input is rendered verbatim.
pub trait Instructions {
    /// Borrow the accumulated instruction set.
    fn instructions(&self) -> &InstructionSet;

    /// Mutably borrow the accumulated instruction set.
    fn instructions_mut(&mut self) -> &mut InstructionSet;

    /// Render the accumulated instructions as manifest text.
    fn render(&self) -> String {
        self.instructions().render()
    }

    /// Accumulated lines, in append order.
    fn lines(&self) -> &[String] {
        self.instructions().lines()
    }

    /// `FROM <image>`, the base image for subsequent instructions.
    #[allow(clippy::wrong_self_convention)]
    fn from(&mut self, image: &str) -> &mut Self {
        self.instructions_mut().push(format!("FROM {image}"));
        self
    }

    /// `RUN <command>` (shell form).
    fn run(&mut self, command: &str) -> &mut Self {
        self.instructions_mut().push(format!("RUN {command}"));
        self
    }

    /// `COPY <src> <dest>`, copying files from the build context.
    fn copy(&mut self, src: &str, dest: &str) -> &mut Self {
        self.instructions_mut().push(format!("COPY {src} {dest}"));
        self
    }

    /// `ADD <src> <dest>`. Like COPY, but also accepts URLs and archives.
    fn add(&mut self, src: &str, dest: &str) -> &mut Self {
        self.instructions_mut().push(format!("ADD {src} {dest}"));
        self
    }

    /// `ENV <key>=<value>`.
    fn env(&mut self, key: &str, value: &str) -> &mut Self {
        self.instructions_mut().push(format!("ENV {key}={value}"));
        self
    }

    /// `WORKDIR <dir>`, the working directory for the instructions that follow.
    fn workdir(&mut self, dir: &str) -> &mut Self {
        self.instructions_mut().push(format!("WORKDIR {dir}"));
        self
    }

    /// `CMD <command>` (shell form) or `CMD ["executable", "param"]` (exec
    /// form), the default command for the image.
    fn cmd(&mut self, command: impl Into<CommandForm>) -> &mut Self {
        let line = command.into().render("CMD");
        self.instructions_mut().push(line);
        self
    }

    /// `ENTRYPOINT <command>` (shell form) or `ENTRYPOINT ["executable",
    /// "param"]` (exec form).
    fn entrypoint(&mut self, command: impl Into<CommandForm>) -> &mut Self {
        let line = command.into().render("ENTRYPOINT");
        self.instructions_mut().push(line);
        self
    }

    /// `LABEL <key>="<value>"`. The value is always quoted.
    fn label(&mut self, key: &str, value: &str) -> &mut Self {
        self.instructions_mut().push(format!("LABEL {key}=\"{value}\""));
        self
    }

    /// `MAINTAINER <name>`.
    fn maintainer(&mut self, name: &str) -> &mut Self {
        self.instructions_mut().push(format!("MAINTAINER {name}"));
        self
    }

    /// `EXPOSE <port>`.
    fn expose(&mut self, port: u16) -> &mut Self {
        self.instructions_mut().push(format!("EXPOSE {port}"));
        self
    }

    /// `VOLUME <path>` (string form) or `VOLUME ["/a", "/b"]` (array form).
    fn volume(&mut self, volume: impl Into<CommandForm>) -> &mut Self {
        let line = volume.into().render("VOLUME");
        self.instructions_mut().push(line);
        self
    }

    /// `USER <user>[:<group>]`.
    fn user(&mut self, user: &str) -> &mut Self {
        self.instructions_mut().push(format!("USER {user}"));
        self
    }

    /// `ARG <key>`, a build-time variable without a default.
    fn arg(&mut self, key: &str) -> &mut Self {
        self.instructions_mut().push(format!("ARG {key}"));
        self
    }

    /// `ARG <key>=<value>`, a build-time variable with a default.
    fn arg_with_default(&mut self, key: &str, value: &str) -> &mut Self {
        self.instructions_mut().push(format!("ARG {key}={value}"));
        self
    }

    /// `ONBUILD <instruction>`, a trigger executed by downstream builds.
    fn on_build(&mut self, instruction: &str) -> &mut Self {
        self.instructions_mut().push(format!("ONBUILD {instruction}"));
        self
    }

    /// `STOPSIGNAL <signal>`.
    fn stop_signal(&mut self, signal: &str) -> &mut Self {
        self.instructions_mut().push(format!("STOPSIGNAL {signal}"));
        self
    }

    /// `HEALTHCHECK CMD <command>`.
    fn healthcheck(&mut self, command: &str) -> &mut Self {
        self.instructions_mut().push(format!("HEALTHCHECK CMD {command}"));
        self
    }

    /// `HEALTHCHECK <options> CMD <command>`.
    fn healthcheck_with_options(&mut self, command: &str, options: &str) -> &mut Self {
        self.instructions_mut()
            .push(format!("HEALTHCHECK {options} CMD {command}"));
        self
    }

    /// `SHELL ["executable", "parameters"]`. Always the array form.
    fn shell(&mut self, shell: &[&str]) -> &mut Self {
        self.instructions_mut()
            .push(format!("SHELL [\"{}\"]", shell.join("\", \"")));
        self
    }

    /// `# <comment>`, a free-text comment line.
    fn comment(&mut self, comment: &str) -> &mut Self {
        self.instructions_mut().push(format!("# {comment}"));
        self
    }

    /// Absorb a rendered [`Step`] as a labeled block.
    ///
    /// The block is preceded by one blank line and inserted opaquely at the
    /// current position; the step's own lines are not inspected.
    fn with_step(&mut self, step: &Step) -> &mut Self {
        let set = self.instructions_mut();
        set.push(String::new());
        set.push(step.render());
        self
    }
}
