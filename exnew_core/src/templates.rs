//! The embedded template bodies for the generated scaffold.
//!
//! Templates are plain data, kept apart from the rendering grammar in
//! [`crate::render`]. Each body may use `<%= key %>` interpolation and
//! `<%= if key do %> ... <% end %>` conditional blocks; the keys available
//! at render time are assembled in [`crate::scaffold::plan_project`].

/// The project manifest. The `sup` conditional wires the generated
/// application module into the manifest when a supervision tree was
/// requested.
pub const MANIFEST: &str = r#"defmodule <%= mod %>.MixProject do
  use Mix.Project

  def project do
    [
      app: :<%= app %>,
      version: "0.1.0",
      elixir: "~> <%= version %>",
      start_permanent: Mix.env() == :prod,
      deps: deps()
    ]
  end

  # Run "mix help compile.app" to learn about applications.
  def application do
    [
      extra_applications: [:logger]<%= if sup do %>,
      mod: {<%= mod %>.Application, []}<% end %>
    ]
  end

  # Run "mix help deps" to learn about dependencies.
  defp deps do
    [
      # {:dep_from_hexpm, "~> 0.3.0"},
      # {:dep_from_git, git: "https://github.com/elixir-lang/my_dep.git", tag: "0.1.0"}
    ]
  end
end
"#;

pub const README: &str = r#"# <%= mod %>

**TODO: Add description**

## Installation

If [available in Hex](https://hex.pm/docs/publish), the package can be installed
by adding `<%= app %>` to your list of dependencies in `mix.exs`:

```elixir
def deps do
  [
    {:<%= app %>, "~> 0.1.0"}
  ]
end
```

Documentation can be generated with [ExDoc](https://github.com/elixir-lang/ex_doc)
and published on [HexDocs](https://hexdocs.pm). Once published, the docs can
be found at <https://hexdocs.pm/<%= app %>>.
"#;

pub const GITIGNORE: &str = r#"# The directory Mix will write compiled artifacts to.
/_build/

# If you run "mix test --cover", coverage assets end up here.
/cover/

# The directory Mix downloads your dependencies sources to.
/deps/

# Where third-party dependencies like ExDoc output generated docs.
/doc/

# If the VM crashes, it generates a dump, let's ignore it too.
erl_crash.dump

# Also ignore archive artifacts (built via "mix archive.build").
*.ez

# Ignore package tarball (built via "mix hex.build").
<%= app %>-*.tar

# Temporary files, for example, from tests.
/tmp/
"#;

pub const FORMATTER: &str = r#"# Used by "mix format"
[
  inputs: ["{mix,.formatter}.exs", "{config,lib,test}/**/*.{ex,exs}"]
]
"#;

pub const LIB: &str = r#"defmodule <%= mod %> do
  @moduledoc """
  Documentation for `<%= mod %>`.
  """

  @doc """
  Hello world.

  ## Examples

      iex> <%= mod %>.hello()
      :world

  """
  def hello do
    :world
  end
end
"#;

/// The supervision tree stub, only generated when `sup` is set.
pub const LIB_APPLICATION: &str = r#"defmodule <%= mod %>.Application do
  # See https://hexdocs.pm/elixir/Application.html
  # for more information on OTP Applications
  @moduledoc false

  use Application

  @impl true
  def start(_type, _args) do
    children = [
      # Starts a worker by calling: <%= mod %>.Worker.start_link(arg)
      # {<%= mod %>.Worker, arg}
    ]

    # See https://hexdocs.pm/elixir/Supervisor.html
    # for other strategies and supported options
    opts = [strategy: :one_for_one, name: <%= mod %>.Supervisor]
    Supervisor.start_link(children, opts)
  end
end
"#;

pub const TEST: &str = r#"defmodule <%= mod %>Test do
  use ExUnit.Case
  doctest <%= mod %>

  test "greets the world" do
    assert <%= mod %>.hello() == :world
  end
end
"#;

pub const TEST_HELPER: &str = "ExUnit.start()\n";
