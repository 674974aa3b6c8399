/*!
An interactive CLI for the belief revision engine.

# Use

```sh
doxa_cli
```

Reads commands from stdin, one per line, and prints `c `-prefixed status lines to stdout. See
[menu::dispatch] for the full command list.
*/

mod menu;
mod scenarios;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let mut agent = doxa::context::Agent::default();
    let code = menu::run(&mut agent);
    std::process::exit(code);
}
