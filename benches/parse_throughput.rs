//! Parse throughput for multi-line purchase orders and claims

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use edi_processor::parse_edi;

const ISA: &str = "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     *231204*1030*U*00401*000000001*0*P*>~";

fn purchase_order(lines: usize) -> String {
    let mut content = format!("{}\nGS*PO*SENDERID*RECEIVERID*20231204*1030*1*X*004010~\nST*850*0001~\nBEG*00*SA*PO-12345**20231204~\nN1*ST*SHIP TO LOCATION*92*12345~\n", ISA);
    for i in 0..lines {
        content.push_str(&format!("PO1*{}*{}*EA*10.50**VP*PART-{:05}~\n", i + 1, i % 50 + 1, i));
    }
    content.push_str(&format!("SE*{}*0001~\nGE*1*1~\nIEA*1*000000001~", lines + 4));
    content
}

fn medical_claim(claims: usize) -> String {
    let mut content = format!("{}\nGS*HC*SENDERID*RECEIVERID*20231204*1030*1*X*005010X222A1~\nST*837*0001~\nBHT*0019*00*REF1*20231201*1023*CH~\n", ISA);
    for i in 0..claims {
        content.push_str(&format!(
            "CLM*CLAIM-{:05}*{}.25***11:B:1*Y*A*Y*Y~\nNM1*85*2*CLINIC {}~\nNM1*IL*1*DOE*JANE****MI*{:09}~\nHI*ABK:J0300*ABF:R05~\n",
            i, 100 + i, i % 7, 100_000_000 + i
        ));
    }
    content.push_str("SE*1*0001~\nGE*1*1~\nIEA*1*000000001~");
    content
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_edi");

    for size in [10, 100, 1_000] {
        let po = purchase_order(size);
        group.throughput(Throughput::Bytes(po.len() as u64));
        group.bench_with_input(BenchmarkId::new("850", size), &po, |b, content| {
            b.iter(|| parse_edi(black_box(content)))
        });

        let claim = medical_claim(size);
        group.throughput(Throughput::Bytes(claim.len() as u64));
        group.bench_with_input(BenchmarkId::new("837", size), &claim, |b, content| {
            b.iter(|| parse_edi(black_box(content)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
