// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shows a request boundary that logs the full error chain but answers with the public annotation.

use std::io;

use anyhow::Context;
use http::{Request, Response};
use public_error::{Disclosure, ResultExt};

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    for path in ["/orders/17", "/orders/18", "/orders/not-a-number"] {
        let request = Request::get(path).body(()).expect("path is a valid URI");
        let response = serve(&request);

        println!("{path} -> {} {:?}", response.status(), response.body());
    }
}

fn serve(request: &Request<()>) -> Response<String> {
    match handle(request) {
        Ok(response) => response,
        Err(err) => {
            let disclosure = Disclosure::resolve(&*err);

            tracing::error!(
                status = disclosure.status_code(),
                error = %err,
                root_cause = %err.root_cause(),
                "request failed"
            );

            Response::builder()
                .status(disclosure.http_status())
                .body(format!("{}\n", disclosure.message()))
                .expect("status is valid")
        }
    }
}

fn handle(request: &Request<()>) -> anyhow::Result<Response<String>> {
    let id = request.uri().path().trim_start_matches("/orders/");
    let order = load_order(id).with_context(|| format!("handling {}", request.uri()))?;

    Ok(Response::new(order))
}

fn load_order(id: &str) -> Result<String, public_error::PublicError> {
    let id = id.parse::<u64>().public("order id must be numeric", 400)?;

    query(id).public_with(|| (format!("order {id} is temporarily unavailable"), 503))
}

fn query(id: u64) -> Result<String, io::Error> {
    if id % 2 == 0 {
        Err(io::Error::new(
            io::ErrorKind::TimedOut,
            format!("SELECT * FROM orders WHERE id = {id} timed out on replica db-3"),
        ))
    } else {
        Ok(format!("order {id}: 2 items\n"))
    }
}
