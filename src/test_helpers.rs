use std::collections::VecDeque;
use std::string::String;
use std::vec;
use std::vec::Vec;

use atat::blocking::AtatClient;
use atat::AtatCmd;

/// Records every command written and answers from a queue of canned
/// responses. An empty queue answers with a bare `OK`.
#[derive(Debug, Default)]
pub struct MockAtClient {
    /// Commands sent so far, without the trailing `\r\n`
    pub sent: Vec<String>,
    responses: VecDeque<Result<&'static [u8], atat::Error>>,
}

impl MockAtClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&mut self, resp: &'static [u8]) -> &mut Self {
        self.responses.push_back(Ok(resp));
        self
    }

    pub fn fail(&mut self, error: atat::Error) -> &mut Self {
        self.responses.push_back(Err(error));
        self
    }
}

impl AtatClient for MockAtClient {
    fn send<Cmd: AtatCmd>(&mut self, cmd: &Cmd) -> Result<Cmd::Response, atat::Error> {
        let mut buf = vec![0; Cmd::MAX_LEN];
        let len = cmd.write(&mut buf);
        self.sent
            .push(String::from_utf8_lossy(&buf[..len]).trim_end().into());

        match self.responses.pop_front() {
            Some(Ok(resp)) => cmd.parse(Ok(resp)),
            Some(Err(e)) => Err(e),
            None => cmd.parse(Ok(&[])),
        }
    }
}
