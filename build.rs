fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Server bindings are only used by the integration tests, which mount an
    // in-process QuantifyData service to talk to.
    tonic_build::configure()
        .build_client(true)
        .build_server(true)
        .compile(&["proto/quantify.proto"], &["proto"])?;
    Ok(())
}
